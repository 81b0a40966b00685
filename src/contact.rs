use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{FormData, Headers, HtmlButtonElement, HtmlFormElement, Request, RequestInit, Response};

use folio_core::contact::{self, SENDING_LABEL};
use folio_core::{
    Completion, FieldName, FormFields, MailtoLink, Severity, SubmitPlan, TransportError,
};

use crate::config::CONTACT_FORM_SELECTOR;
use crate::dom;
use crate::notification::NotificationPresenter;

/// Submit button swapped to the busy label; restored when dropped.
struct BusyButton {
    button: HtmlButtonElement,
    label: String,
}

impl BusyButton {
    fn engage(form: &HtmlFormElement) -> Option<Self> {
        let button = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()?
            .dyn_into::<HtmlButtonElement>()
            .ok()?;
        let label = button.inner_html();
        button.set_inner_html(SENDING_LABEL);
        button.set_disabled(true);
        Some(Self { button, label })
    }
}

impl Drop for BusyButton {
    fn drop(&mut self) {
        self.button.set_inner_html(&self.label);
        self.button.set_disabled(false);
    }
}

pub(crate) struct ContactForm {
    form: HtmlFormElement,
    endpoint: String,
    notifications: Rc<NotificationPresenter>,
}

impl ContactForm {
    /// Hooks the page's contact form. Returns `None` when the page has none.
    pub(crate) fn install(
        notifications: Rc<NotificationPresenter>,
        endpoint: String,
    ) -> Option<(Rc<Self>, EventListener)> {
        let form = dom::query(CONTACT_FORM_SELECTOR)?
            .dyn_into::<HtmlFormElement>()
            .ok()?;
        if endpoint.is_empty() {
            gloo::console::log!("contact: no endpoint, mail client only");
        }
        let form = Rc::new(Self {
            form,
            endpoint,
            notifications,
        });
        let handler = Rc::clone(&form);
        let listener = EventListener::new_with_options(
            &form.form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                handler.submit();
            },
        );
        Some((form, listener))
    }

    fn submit(self: &Rc<Self>) {
        let fields = match read_fields(&self.form) {
            Ok(fields) => fields,
            Err(err) => {
                gloo::console::warn!("contact: unreadable form", dom::js_err(err));
                return;
            }
        };
        let plan = match contact::begin(&fields, &self.endpoint) {
            Ok(plan) => plan,
            Err(err) => {
                self.notifications.show(err.user_message(), Severity::Error);
                return;
            }
        };
        match plan {
            SubmitPlan::Fallback(completion) => self.settle(completion),
            SubmitPlan::Post { endpoint, payload } => {
                gloo::console::log!("contact: sending", endpoint.clone());
                let busy = BusyButton::engage(&self.form);
                let handler = Rc::clone(self);
                spawn_local(async move {
                    let response = post_json(&endpoint, &payload).await;
                    drop(busy);
                    handler.settle(contact::finish(&payload, response));
                });
            }
        }
    }

    fn settle(&self, completion: Completion) {
        if let Some(failure) = completion.failure.as_ref() {
            gloo::console::warn!("contact: submission error", failure.to_string());
        }
        self.notifications.show(completion.message, completion.severity);
        if let Some(mailto) = completion.mailto.as_ref() {
            open_mail_client(mailto);
        }
        if completion.clear_form {
            self.form.reset();
        }
    }
}

fn read_fields(form: &HtmlFormElement) -> Result<FormFields, JsValue> {
    let data = FormData::new_with_form(form)?;
    let get = |field: FieldName| data.get(field.as_str()).as_string().unwrap_or_default();
    Ok(FormFields {
        name: get(FieldName::Name),
        email: get(FieldName::Email),
        subject: get(FieldName::Subject),
        message: get(FieldName::Message),
    })
}

/// Hands the prefilled message to the visitor's mail handler. Delivery can't be confirmed.
fn open_mail_client(mailto: &MailtoLink) {
    let Some(window) = dom::window() else {
        return;
    };
    gloo::console::log!("contact: opening mail client");
    if let Err(err) = window.location().set_href(&mailto_uri(mailto)) {
        gloo::console::warn!("contact: mailto navigation failed", dom::js_err(err));
    }
}

fn mailto_uri(mailto: &MailtoLink) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        encode_component(&mailto.recipient),
        encode_component(&mailto.subject),
        encode_component(&mailto.body)
    )
}

fn encode_component(raw: &str) -> String {
    js_sys::encode_uri_component(raw)
        .as_string()
        .unwrap_or_else(|| raw.to_string())
}

async fn post_json(endpoint: &str, payload: &FormFields) -> Result<(), TransportError> {
    let body = payload
        .to_json()
        .map_err(|err| TransportError::Network(err.to_string()))?;
    let response = send(endpoint, &body)
        .await
        .map_err(|err| TransportError::Network(dom::js_err(err)))?;
    let status = response.status();
    let text = if response.ok() {
        String::new()
    } else {
        response_text(&response).await.unwrap_or_default()
    };
    TransportError::check_status(status, text)
}

async fn send(endpoint: &str, body: &str) -> Result<Response, JsValue> {
    let window = dom::window().ok_or_else(|| JsValue::from_str("missing window"))?;
    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));
    let request = Request::new_with_str_and_init(endpoint, &init)?;
    let value = JsFuture::from(window.fetch_with_request(&request)).await?;
    value.dyn_into::<Response>()
}

async fn response_text(response: &Response) -> Result<String, JsValue> {
    let value = JsFuture::from(response.text()?).await?;
    Ok(value.as_string().unwrap_or_default())
}
