use crate::error::{AccessError, AccessResult};
use crate::profile::ServiceProfile;

/// Expands `%(key)s` placeholders from `profile`; `%%` is a literal `%`.
pub fn render(template: &str, profile: &ServiceProfile) -> AccessResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(tail) = after.strip_prefix('%') {
            out.push('%');
            rest = tail;
            continue;
        }

        let body = after.strip_prefix('(').ok_or_else(|| {
            AccessError::InvalidTemplate(format!("expected `%(key)s` or `%%` in {template:?}"))
        })?;
        let close = body.find(")s").ok_or_else(|| {
            AccessError::InvalidTemplate(format!("unterminated placeholder in {template:?}"))
        })?;

        let key = &body[..close];
        let value = lookup(profile, key)?;
        out.push_str(value);
        rest = &body[close + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

fn lookup<'a>(profile: &'a ServiceProfile, key: &str) -> AccessResult<&'a str> {
    if profile.is_unset(key) {
        return Err(AccessError::InvalidTemplate(format!("key '{key}' is unset")));
    }

    profile
        .get(key)
        .ok_or_else(|| AccessError::InvalidTemplate(format!("no key '{key}' in profile")))
}
