use wasm_bindgen::JsValue;

use crate::dom;

pub(crate) const ENHANCEMENT_CSS: &str = r#"
.nav-link.active { color: #007aff; }
.nav-link.active::after { width: 100%; }
.loaded { animation: fadeIn 0.6s cubic-bezier(0.25, 0.46, 0.45, 0.94); }
@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
.notification-content {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}
.notification-close {
    background: none;
    border: none;
    color: white;
    font-size: 1.5rem;
    cursor: pointer;
    padding: 0;
    line-height: 1;
    opacity: 0.8;
    transition: opacity 0.3s ease;
}
.notification-close:hover { opacity: 1; }
.floating-card { cursor: pointer; }
.skill-item,
.project-card,
.highlight-item {
    transition: all 0.3s cubic-bezier(0.25, 0.46, 0.45, 0.94);
}
.btn { position: relative; overflow: hidden; }
.btn::before {
    content: '';
    position: absolute;
    top: 0;
    left: -100%;
    width: 100%;
    height: 100%;
    background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.2), transparent);
    transition: left 0.5s;
}
.btn:hover::before { left: 100%; }
.form-group input:focus,
.form-group textarea:focus {
    transition: all 0.3s cubic-bezier(0.25, 0.46, 0.45, 0.94);
}
.social-link { position: relative; overflow: hidden; }
.social-link::before {
    content: '';
    position: absolute;
    top: 50%;
    left: 50%;
    width: 0;
    height: 0;
    background: rgba(255, 255, 255, 0.2);
    border-radius: 50%;
    transition: all 0.3s cubic-bezier(0.25, 0.46, 0.45, 0.94);
    transform: translate(-50%, -50%);
}
.social-link:hover::before { width: 100%; height: 100%; }
"#;

pub(crate) const SPIN_CSS: &str =
    "@keyframes spin { 0% { transform: rotate(0deg); } 100% { transform: rotate(360deg); } }";

pub(crate) fn inject(css: &str) -> Result<(), JsValue> {
    let document = dom::document().ok_or_else(|| JsValue::from_str("missing document"))?;
    let head = document.head().ok_or_else(|| JsValue::from_str("missing head"))?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(css));
    head.append_child(&style)?;
    Ok(())
}
