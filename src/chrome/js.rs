//! JavaScript probe templates evaluated in the page context.

pub fn escape_selector(selector: &str) -> String {
    selector.replace('\\', "\\\\").replace('\'', "\\'")
}

pub fn visibility_check(selector: &str) -> String {
    let escaped = escape_selector(selector);
    format!(
        r#"(function(){{const el=document.querySelector('{}');if(!el)return false;const style=window.getComputedStyle(el);const rect=el.getBoundingClientRect();return style.display!=='none'&&style.visibility!=='hidden'&&parseFloat(style.opacity||'1')>0&&rect.width>0&&rect.height>0}})()"#,
        escaped
    )
}

pub fn clickable_check(selector: &str) -> String {
    let escaped = escape_selector(selector);
    format!(
        r#"(function(){{const el=document.querySelector('{}');if(!el)return false;if(el.disabled)return false;const style=window.getComputedStyle(el);const rect=el.getBoundingClientRect();return style.display!=='none'&&style.visibility!=='hidden'&&style.pointerEvents!=='none'&&rect.width>0&&rect.height>0}})()"#,
        escaped
    )
}

pub fn text_content(selector: &str) -> String {
    let escaped = escape_selector(selector);
    format!(
        r#"(function(){{const el=document.querySelector('{}');return el?el.textContent:null}})()"#,
        escaped
    )
}

pub fn attribute_value(selector: &str, attribute: &str) -> String {
    let escaped = escape_selector(selector);
    let escaped_attr = escape_selector(attribute);
    format!(
        r#"(function(){{const el=document.querySelector('{}');return el?el.getAttribute('{}'):null}})()"#,
        escaped, escaped_attr
    )
}

pub fn click_element(selector: &str) -> String {
    let escaped = escape_selector(selector);
    format!(
        r#"(function(){{const el=document.querySelector('{}');if(!el)return{{found:false}};el.scrollIntoView({{block:'center',behavior:'instant'}});el.click();return{{found:true}}}})()"#,
        escaped
    )
}

pub fn fill_element(selector: &str, text: &str) -> String {
    let escaped = escape_selector(selector);
    let escaped_text = escape_selector(text);
    format!(
        r#"(function(){{const el=document.querySelector('{}');if(!el)return{{found:false}};el.scrollIntoView({{block:'center',behavior:'instant'}});el.focus();el.value='{}';el.dispatchEvent(new Event('input',{{bubbles:true}}));el.dispatchEvent(new Event('change',{{bubbles:true}}));return{{found:true}}}})()"#,
        escaped, escaped_text
    )
}

pub const READY_STATE_COMPLETE: &str = r#"document.readyState === 'complete'"#;

/// Reports idle when the jQuery hook is absent, so suites against pages
/// without jQuery never block on this probe.
pub const JQUERY_IDLE: &str =
    r#"typeof jQuery !== 'undefined' ? jQuery.active === 0 : true"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_selector() {
        assert_eq!(escape_selector("div"), "div");
        assert_eq!(escape_selector("div's"), "div\\'s");
        assert_eq!(escape_selector("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_probe_scripts_embed_selector() {
        assert!(visibility_check("#login-button").contains("'#login-button'"));
        assert!(clickable_check("#login-button").contains("el.disabled"));
        assert!(attribute_value("#user-name", "class").contains("getAttribute('class')"));
    }

    #[test]
    fn test_jquery_probe_fails_open() {
        assert!(JQUERY_IDLE.contains("typeof jQuery !== 'undefined'"));
        assert!(JQUERY_IDLE.ends_with(": true"));
    }
}
