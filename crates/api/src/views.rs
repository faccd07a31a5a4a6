//! Server-rendered HTML views.
//!
//! Pages are handlebars templates compiled once into a process-wide registry;
//! handlebars owns HTML escaping of every interpolated value. Views stay a
//! thin collaborator: they receive domain data and produce markup, no
//! business logic.

use std::sync::LazyLock;

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

use stockroom_core::{Entity, ItemId};
use stockroom_inventory::{item_record, report_record, Item, ItemDraft, Report};

const LISTING_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Inventory</title></head>
<body>
<h1>Inventory</h1>
{{#if error}}<p class="error">{{error}}</p>{{/if}}
{{#if categories}}<p>Categories: {{#each categories}}<a href="/?category={{this}}">{{this}}</a>{{#unless @last}} | {{/unless}}{{/each}}</p>{{/if}}
<table>
<tr><th>ID</th><th>Name</th><th>Quantity</th><th>Price</th><th>Category</th><th></th></tr>
{{#each items}}
<tr><td>{{id}}</td><td>{{name}}</td><td>{{quantity}}</td><td>{{price}}</td><td>{{category}}</td><td><a href="/items/{{id}}">Edit</a> <a href="/items/{{id}}/delete">Delete</a></td></tr>
{{/each}}
</table>
<h2>Add item</h2>
<form method="post" action="/manage_items">
<label>Name <input name="name"></label>
<label>Quantity <input name="quantity"></label>
<label>Price <input name="price"></label>
<label>Category <input name="category"></label>
<button type="submit">Add</button>
</form>
</body>
</html>
"#;

const EDIT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Edit item</title></head>
<body>
<h1>Edit item {{id}}</h1>
{{#if error}}<p class="error">{{error}}</p>{{/if}}
<form method="post" action="/items/{{id}}">
<label>Name <input name="name" value="{{name}}"></label>
<label>Quantity <input name="quantity" value="{{quantity}}"></label>
<label>Price <input name="price" value="{{price}}"></label>
<label>Category <input name="category" value="{{category}}"></label>
<button type="submit">Save</button>
</form>
<p><a href="/manage_items">Back to listing</a></p>
</body>
</html>
"#;

const REPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Summary report</title></head>
<body>
<h1>Summary report</h1>
<p>Total inventory value: <strong>{{total_value}}</strong></p>
<h2>Categories</h2>
<table>
<tr><th>Category</th><th>Count</th><th>Value</th></tr>
{{#each categories}}
<tr><td>{{@key}}</td><td>{{count}}</td><td>{{value}}</td></tr>
{{/each}}
</table>
<h2>Out of stock</h2>
<ul>
{{#each negative_items}}
<li>{{name}} (quantity {{quantity}})</li>
{{/each}}
</ul>
</body>
</html>
"#;

static TEMPLATES: LazyLock<Handlebars<'static>> = LazyLock::new(|| {
    let mut registry = Handlebars::new();
    for (name, template) in [
        ("listing", LISTING_TEMPLATE),
        ("edit", EDIT_TEMPLATE),
        ("report", REPORT_TEMPLATE),
    ] {
        registry
            .register_template_string(name, template)
            .expect("built-in template must compile");
    }
    registry
});

fn render(name: &str, data: &impl Serialize) -> String {
    // Built-in templates over serializable data; a failure here is a bug,
    // but it must not take the request handler down with it.
    TEMPLATES.render(name, data).unwrap_or_else(|e| {
        tracing::error!(template = name, error = %e, "template render failed");
        "<!DOCTYPE html>\n<html><body><p>page failed to render</p></body></html>\n".to_string()
    })
}

/// Field values shown in the edit form, kept as raw text so a rejected
/// submission can be re-rendered exactly as the user typed it.
#[derive(Debug, Serialize)]
pub struct EditForm {
    pub id: ItemId,
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub category: String,
}

impl EditForm {
    /// Form pre-filled from a stored item.
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id(),
            name: item.name().to_string(),
            quantity: item.quantity().to_string(),
            price: item.price().to_string(),
            category: item.category().unwrap_or("").to_string(),
        }
    }

    /// Form carrying the user's submitted values, valid or not.
    pub fn from_submission(id: ItemId, draft: &ItemDraft) -> Self {
        Self {
            id,
            name: draft.name.clone().unwrap_or_default(),
            quantity: draft.quantity.clone().unwrap_or_default(),
            price: draft.price.clone().unwrap_or_default(),
            category: draft.category.clone().unwrap_or_default(),
        }
    }
}

/// Listing page with the create form. `categories` is the distinct category
/// list of the shown items.
pub fn listing_page(items: &[Item], categories: &[String], error: Option<&str>) -> String {
    let records: Vec<_> = items.iter().map(item_record).collect();
    render(
        "listing",
        &json!({
            "error": error,
            "categories": categories,
            "items": records,
        }),
    )
}

/// Edit form for a single item.
pub fn edit_form_page(form: &EditForm, error: Option<&str>) -> String {
    render(
        "edit",
        &json!({
            "id": form.id,
            "name": form.name,
            "quantity": form.quantity,
            "price": form.price,
            "category": form.category,
            "error": error,
        }),
    )
}

/// Summary report page.
pub fn report_page(report: &Report) -> String {
    render("report", &report_record(report))
}
