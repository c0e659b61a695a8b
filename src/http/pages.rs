use crate::core::models::TokenGrant;

const INDEX: &str = include_str!("../../templates/index.html");
const SUCCESS: &str = include_str!("../../templates/success.html");

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

pub fn index() -> &'static str {
    INDEX
}

pub fn success(grant: &TokenGrant) -> String {
    let instance = match &grant.instance_url {
        Some(url) => format!("<p>Instance: <code>{}</code></p>", escape(url)),
        None => String::new(),
    };

    SUCCESS
        .replace("{{token}}", &escape(grant.access_token.as_ref()))
        .replace("{{instance}}", &instance)
}

pub fn success_text(grant: &TokenGrant) -> String {
    format!("Access token: {}", grant.access_token.as_ref())
}
