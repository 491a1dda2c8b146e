//! View rendering.
//!
//! Templates are embedded at compile time and registered under names
//! ending in `.html`, which keeps Tera's HTML auto-escaping on for every
//! interpolated value.

use tera::{Context, Tera};

/// Landing page.
pub const INDEX: &str = "index.html";
/// Record listing table.
pub const READ: &str = "read.html";
/// Empty creation form.
pub const CREATE: &str = "create.html";
/// Record listing plus edit form.
pub const UPDATE: &str = "update.html";
/// Record listing plus delete form.
pub const DELETE: &str = "delete.html";

/// Compiled templates for the record pages.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Compile the embedded template set.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../views/base.html")),
            ("_records.html", include_str!("../views/_records.html")),
            (INDEX, include_str!("../views/index.html")),
            (READ, include_str!("../views/read.html")),
            (CREATE, include_str!("../views/create.html")),
            (UPDATE, include_str!("../views/update.html")),
            (DELETE, include_str!("../views/delete.html")),
        ])?;
        Ok(Self { tera })
    }

    /// Render the named template with the given context into HTML.
    ///
    /// Fails if the template does not exist or the context does not
    /// satisfy it.
    pub fn render(&self, name: &str, context: &Context) -> Result<String, tera::Error> {
        self.tera.render(name, context)
    }
}
