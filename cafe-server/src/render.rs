//! HTML rendering
//!
//! Templates are compiled into the binary and loaded once at startup.
//! `.html` templates are auto-escaped, so user-supplied values are safe to
//! echo back.

use std::sync::Arc;

use minijinja::{Environment, Error, context};
use serde::Serialize;
use shared::models::{Cafe, Seats};

use crate::form::{CafeForm, FieldErrors, checked};

const TEMPLATES: [(&str, &str); 3] = [
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("add.html", include_str!("../templates/add.html")),
];

/// Page renderer
#[derive(Clone)]
pub struct Renderer {
    env: Arc<Environment<'static>>,
}

impl Renderer {
    /// Compile all page templates; fails on a syntax error
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env: Arc::new(env) })
    }

    /// Catalogue page
    pub fn render_list(&self, cafes: &[Cafe], csrf_token: &str) -> Result<String, Error> {
        self.render("index.html", context! { cafes, csrf_token })
    }

    /// Add form, empty or echoing a rejected submission
    pub fn render_add_form(&self, view: &AddFormView<'_>) -> Result<String, Error> {
        self.render("add.html", view)
    }

    fn render<T: Serialize>(&self, name: &str, data: T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }
}

/// Values shown in the add form inputs
#[derive(Debug, Default, Serialize)]
pub struct FormValues<'a> {
    pub name: Option<&'a str>,
    pub map_url: Option<&'a str>,
    pub img_url: Option<&'a str>,
    pub location: Option<&'a str>,
    pub seats: Option<&'a str>,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<&'a str>,
}

impl<'a> From<&'a CafeForm> for FormValues<'a> {
    fn from(form: &'a CafeForm) -> Self {
        Self {
            name: form.name.as_deref(),
            map_url: form.map_url.as_deref(),
            img_url: form.img_url.as_deref(),
            location: form.location.as_deref(),
            seats: form.seats.as_deref(),
            has_toilet: checked(&form.has_toilet),
            has_wifi: checked(&form.has_wifi),
            has_sockets: checked(&form.has_sockets),
            can_take_calls: checked(&form.can_take_calls),
            coffee_price: form.coffee_price.as_deref(),
        }
    }
}

/// Context for `add.html`
#[derive(Debug, Serialize)]
pub struct AddFormView<'a> {
    pub form: FormValues<'a>,
    pub errors: &'a FieldErrors,
    pub seat_choices: Vec<&'static str>,
    pub csrf_token: String,
}

impl<'a> AddFormView<'a> {
    pub fn new(form: FormValues<'a>, errors: &'a FieldErrors, csrf_token: String) -> Self {
        Self {
            form,
            errors,
            seat_choices: Seats::ALL.iter().map(Seats::as_str).collect(),
            csrf_token,
        }
    }
}
