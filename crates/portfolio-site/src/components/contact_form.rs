use std::collections::BTreeMap;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::components::Binding;
use crate::config::ContactConfig;
use crate::error::SiteError;
use crate::models::{ContactField, ContactForm};
use crate::utils::validation::FormValidation;

/// Validates the contact form on submit. Valid forms go through the browser's
/// own submission to whatever `action` the page configures.
pub struct ContactFormHandler {
    _listener: EventListener,
}

struct FieldElements {
    fields: Vec<(ContactField, Element)>,
    document: Document,
    error_class: String,
    message_class: String,
}

impl ContactFormHandler {
    pub fn bind(document: &Document, config: &ContactConfig) -> Result<Binding<Self>, SiteError> {
        let Some(form) = document.get_element_by_id(&config.form_id) else {
            return Ok(Binding::Inactive);
        };
        let mut fields = Vec::with_capacity(ContactField::ALL.len());
        for field in ContactField::ALL {
            let Some(element) = document.get_element_by_id(config.field_id(field)) else {
                log::debug!("contact form has no {:?} field", field);
                return Ok(Binding::Inactive);
            };
            fields.push((field, element));
        }

        let elements = FieldElements {
            fields,
            document: document.clone(),
            error_class: config.error_class.clone(),
            message_class: config.message_class.clone(),
        };

        let listener = EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let errors = elements.read().validate();
                if let Err(e) = elements.annotate(&errors) {
                    log::warn!("{}", e);
                }
                if !errors.is_empty() {
                    log::debug!("contact form blocked: {:?}", errors.keys().collect::<Vec<_>>());
                    event.prevent_default();
                }
            },
        );

        Ok(Binding::Active(Self {
            _listener: listener,
        }))
    }
}

impl FieldElements {
    fn read(&self) -> ContactForm {
        let mut form = ContactForm::default();
        for (field, element) in &self.fields {
            form.set(*field, field_value(element));
        }
        form
    }

    fn annotate(&self, errors: &BTreeMap<ContactField, String>) -> Result<(), SiteError> {
        for (field, element) in &self.fields {
            match errors.get(field) {
                Some(message) => self.show_error(element, message)?,
                None => self.clear_error(element)?,
            }
        }
        Ok(())
    }

    fn show_error(&self, input: &Element, message: &str) -> Result<(), SiteError> {
        input.class_list().add_1(&self.error_class)?;
        let Some(parent) = input.parent_element() else {
            return Ok(());
        };
        let selector = format!(".{}", self.message_class);
        let error_div = match parent.query_selector(&selector)? {
            Some(existing) => existing,
            None => {
                let created = self.document.create_element("div")?;
                created.set_class_name(&self.message_class);
                parent.append_child(&created)?;
                created
            }
        };
        error_div.set_text_content(Some(message));
        Ok(())
    }

    fn clear_error(&self, input: &Element) -> Result<(), SiteError> {
        input.class_list().remove_1(&self.error_class)?;
        if let Some(parent) = input.parent_element() {
            let selector = format!(".{}", self.message_class);
            if let Some(error_div) = parent.query_selector(&selector)? {
                error_div.remove();
            }
        }
        Ok(())
    }
}

fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        element.text_content().unwrap_or_default()
    }
}
