//! Server-side HTML.
//!
//! Pages are assembled from small helpers: a shared layout, a generic form
//! renderer that knows how to show field errors, and a table renderer.
//! Every piece of user-supplied text goes through [`escape`].

use crate::{
    entities::{expense, guest, task, user, vendor},
    forms::{ExpenseForm, FormErrors, GuestForm, LoginForm, RegistrationForm, TaskForm, VendorForm},
    web::flash::Notice,
};
use rust_decimal::Decimal;

/// Escapes text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps a page body with the document shell, navigation and notice area.
#[must_use]
pub fn layout(title: &str, user: Option<&user::Model>, notice: Option<&Notice>, body: &str) -> String {
    let nav = if user.is_some() {
        r#"<a href="/guests">Guests</a> <a href="/tasks">Tasks</a> <a href="/vendors">Vendors</a> <a href="/expenses">Expenses</a> <a href="/account">Account</a> <a href="/logout">Logout</a>"#
    } else {
        r#"<a href="/login">Login</a> <a href="/register">Register</a>"#
    };
    let notice = notice.map_or_else(String::new, |n| {
        format!(
            r#"<div class="alert alert-{}">{}</div>"#,
            n.level.as_str(),
            escape(&n.message)
        )
    });

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Event Planner - {title}</title></head>
<body>
<nav><a href="/home">Event Planner</a> {nav}</nav>
<main>
{notice}
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Kind of form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Text,
    Email,
    Password,
    TextArea,
    Checkbox,
}

/// One labelled form control.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub input: Input,
    pub value: &'a str,
    pub placeholder: Option<&'a str>,
}

impl<'a> Field<'a> {
    #[must_use]
    pub const fn new(name: &'a str, label: &'a str, input: Input, value: &'a str) -> Self {
        Self {
            name,
            label,
            input,
            value,
            placeholder: None,
        }
    }

    #[must_use]
    pub const fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    fn render(&self, error: Option<&str>) -> String {
        let name = escape(self.name);
        let value = escape(self.value);
        let placeholder = self
            .placeholder
            .map_or_else(String::new, |p| format!(r#" placeholder="{}""#, escape(p)));
        let control = match self.input {
            Input::Text => format!(r#"<input type="text" id="{name}" name="{name}" value="{value}"{placeholder}>"#),
            Input::Email => format!(r#"<input type="email" id="{name}" name="{name}" value="{value}"{placeholder}>"#),
            // Passwords are never echoed back.
            Input::Password => format!(r#"<input type="password" id="{name}" name="{name}">"#),
            Input::TextArea => format!(r#"<textarea id="{name}" name="{name}"{placeholder}>{value}</textarea>"#),
            Input::Checkbox => {
                let checked = if self.value.is_empty() { "" } else { " checked" };
                format!(r#"<input type="checkbox" id="{name}" name="{name}" value="y"{checked}>"#)
            }
        };
        let error = error.map_or_else(String::new, |e| {
            format!(r#"<span class="invalid-feedback">{}</span>"#, escape(e))
        });
        format!(
            r#"<div class="form-group"><label for="{name}">{}</label>{control}{error}</div>"#,
            escape(self.label)
        )
    }
}

/// Renders a POST form with per-field errors.
#[must_use]
pub fn form(action: &str, fields: &[Field<'_>], errors: &FormErrors, submit: &str) -> String {
    let controls: String = fields
        .iter()
        .map(|field| field.render(errors.get(field.name)))
        .collect();
    format!(
        r#"<form method="POST" action="{}">{controls}<button type="submit">{}</button></form>"#,
        escape(action),
        escape(submit)
    )
}

/// Renders rows of plain text as a table, or `empty` when there are no rows.
#[must_use]
pub fn table(headers: &[&str], rows: &[Vec<String>], empty: &str) -> String {
    if rows.is_empty() {
        return format!("<p>{}</p>", escape(empty));
    }
    let head: String = headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape(h)))
        .collect();
    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| format!("<td>{}</td>", escape(cell)))
                .collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();
    format!("<table><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table>")
}

#[must_use]
pub fn home(user: Option<&user::Model>) -> String {
    match user {
        Some(user) => format!(
            "<p>Welcome back, {}. Plan your guests, tasks, vendors and expenses from the menu.</p>",
            escape(&user.username)
        ),
        None => r#"<p>Plan your event in one place. <a href="/register">Sign up</a> or <a href="/login">log in</a> to get started.</p>"#.to_string(),
    }
}

#[must_use]
pub fn register_form(form: &RegistrationForm, errors: &FormErrors) -> String {
    self::form(
        "/register",
        &[
            Field::new("username", "Username", Input::Text, &form.username),
            Field::new("email", "Email", Input::Email, &form.email),
            Field::new("password", "Password", Input::Password, ""),
            Field::new("confirm_password", "Confirm Password", Input::Password, ""),
        ],
        errors,
        "Sign Up",
    ) + r#"<p>Already have an account? <a href="/login">Sign In</a></p>"#
}

#[must_use]
pub fn login_form(form: &LoginForm, errors: &FormErrors) -> String {
    let remember = if form.remember.is_some() { "y" } else { "" };
    self::form(
        "/login",
        &[
            Field::new("email", "Email", Input::Email, &form.email),
            Field::new("password", "Password", Input::Password, ""),
            Field::new("remember", "Remember Me", Input::Checkbox, remember),
        ],
        errors,
        "Login",
    ) + r#"<p>Need an account? <a href="/register">Sign Up Now</a></p>"#
}

#[must_use]
pub fn account(user: &user::Model) -> String {
    format!(
        "<dl><dt>Username</dt><dd>{}</dd><dt>Email</dt><dd>{}</dd></dl>",
        escape(&user.username),
        escape(&user.email)
    )
}

fn add_link(href: &str, label: &str) -> String {
    format!(r#"<p><a href="{}">{}</a></p>"#, escape(href), escape(label))
}

#[must_use]
pub fn guest_list(guests: &[guest::Model]) -> String {
    let rows: Vec<Vec<String>> = guests
        .iter()
        .map(|g| vec![g.name.clone(), g.email.clone(), g.category.clone()])
        .collect();
    add_link("/guest/new", "Add Guest")
        + &table(&["Name", "Email", "Category"], &rows, "No guests yet.")
}

#[must_use]
pub fn guest_form(form: &GuestForm, errors: &FormErrors) -> String {
    self::form(
        "/guest/new",
        &[
            Field::new("name", "Name", Input::Text, &form.name),
            Field::new("email", "Email", Input::Email, &form.email),
            Field::new("category", "Category", Input::Text, &form.category),
        ],
        errors,
        "Add Guest",
    )
}

#[must_use]
pub fn task_list(tasks: &[task::Model]) -> String {
    let rows: Vec<Vec<String>> = tasks
        .iter()
        .map(|t| {
            vec![
                t.title.clone(),
                t.description.clone(),
                t.deadline.format(crate::forms::task::DEADLINE_FORMAT).to_string(),
            ]
        })
        .collect();
    add_link("/task/new", "Add Task")
        + &table(&["Title", "Description", "Deadline"], &rows, "No tasks yet.")
}

#[must_use]
pub fn task_form(form: &TaskForm, errors: &FormErrors) -> String {
    self::form(
        "/task/new",
        &[
            Field::new("title", "Title", Input::Text, &form.title),
            Field::new("description", "Description", Input::TextArea, &form.description),
            Field::new("deadline", "Deadline", Input::Text, &form.deadline)
                .placeholder("YYYY-MM-DD HH:MM:SS"),
        ],
        errors,
        "Add Task",
    )
}

#[must_use]
pub fn vendor_list(vendors: &[vendor::Model]) -> String {
    let rows: Vec<Vec<String>> = vendors
        .iter()
        .map(|v| vec![v.name.clone(), v.contact_info.clone(), v.service_type.clone()])
        .collect();
    add_link("/vendor/new", "Add Vendor")
        + &table(&["Name", "Contact Info", "Service Type"], &rows, "No vendors yet.")
}

#[must_use]
pub fn vendor_form(form: &VendorForm, errors: &FormErrors) -> String {
    self::form(
        "/vendor/new",
        &[
            Field::new("name", "Name", Input::Text, &form.name),
            Field::new("contact_info", "Contact Info", Input::Text, &form.contact_info),
            Field::new("service_type", "Service Type", Input::Text, &form.service_type),
        ],
        errors,
        "Add Vendor",
    )
}

#[must_use]
pub fn expense_list(expenses: &[expense::Model], total: Decimal) -> String {
    let rows: Vec<Vec<String>> = expenses
        .iter()
        .map(|e| vec![e.description.clone(), e.amount.clone(), e.category.clone()])
        .collect();
    let summary = if expenses.is_empty() {
        String::new()
    } else {
        format!("<p>Total: {total}</p>")
    };
    add_link("/expense/new", "Add Expense")
        + &table(&["Description", "Amount", "Category"], &rows, "No expenses yet.")
        + &summary
}

#[must_use]
pub fn expense_form(form: &ExpenseForm, errors: &FormErrors) -> String {
    self::form(
        "/expense/new",
        &[
            Field::new("description", "Description", Input::Text, &form.description),
            Field::new("amount", "Amount", Input::Text, &form.amount).placeholder("0.00"),
            Field::new("category", "Category", Input::Text, &form.category),
        ],
        errors,
        "Add Expense",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#x27;y&#x27;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_form_shows_errors_and_escapes_values() {
        let mut errors = FormErrors::default();
        errors.add("name", "This field is required.");
        let html = form(
            "/guest/new",
            &[
                Field::new("name", "Name", Input::Text, ""),
                Field::new("email", "Email", Input::Email, "\"><b>x"),
            ],
            &errors,
            "Add Guest",
        );
        assert!(html.contains("This field is required."));
        assert!(html.contains("value=\"&quot;&gt;&lt;b&gt;x\""));
        assert!(!html.contains("<b>x"));
    }

    #[test]
    fn test_password_is_never_echoed() {
        let form = RegistrationForm {
            password: "hunter2".to_string(),
            confirm_password: "hunter2".to_string(),
            ..RegistrationForm::default()
        };
        assert!(!register_form(&form, &FormErrors::default()).contains("hunter2"));
    }

    #[test]
    fn test_layout_nav_depends_on_login() {
        let anonymous = layout("Home", None, None, "");
        assert!(anonymous.contains("/login"));
        assert!(!anonymous.contains("/logout"));

        let user = user::Model {
            id: 1,
            username: "ana".to_string(),
            email: "a@x.com".to_string(),
            password: String::new(),
        };
        let signed_in = layout("Home", Some(&user), None, "");
        assert!(signed_in.contains("/logout"));
        assert!(signed_in.contains("/account"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(table(&["Name"], &[], "No guests yet."), "<p>No guests yet.</p>");
    }
}
