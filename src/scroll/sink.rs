use log::warn;
use web_sys::HtmlElement;

/// Destination for style values published outside the render cycle.
pub trait StyleSink {
    fn publish(&self, property: &str, value: &str);
}

/// Writes custom properties onto one explicitly provided element.
pub struct ElementStyleSink {
    element: HtmlElement,
}

impl ElementStyleSink {
    pub fn new(element: HtmlElement) -> Self {
        ElementStyleSink { element }
    }
}

impl StyleSink for ElementStyleSink {
    fn publish(&self, property: &str, value: &str) {
        if let Err(err) = self.element.style().set_property(property, value) {
            warn!("failed to set {}: {:?}", property, err);
        }
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct RecordingSink {
    published: std::cell::RefCell<Vec<(String, String)>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn take(&self) -> Vec<(String, String)> {
        self.published.take()
    }
}

#[cfg(test)]
impl StyleSink for RecordingSink {
    fn publish(&self, property: &str, value: &str) {
        self.published
            .borrow_mut()
            .push((property.to_string(), value.to_string()));
    }
}
