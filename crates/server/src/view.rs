//! HTML rendering for the persons list page.

use shared::{
    domain::{SearchField, SortField, SortOrder},
    protocol::PersonResponse,
};
use url::form_urlencoded;

pub(crate) const INDEX_ROUTE: &str = "/contacts/index";

const DISPLAY_DATE_FORMAT: &str = "%d %b %Y";

pub(crate) struct PersonsPage<'a> {
    pub(crate) persons: &'a [PersonResponse],
    pub(crate) search_by: &'a str,
    pub(crate) search_string: &'a str,
    pub(crate) sort: Option<(SortField, SortOrder)>,
}

pub(crate) fn render_persons_index(page: &PersonsPage<'_>) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Persons</title>\n</head>\n<body>\n<h1>Persons</h1>\n",
    );
    html.push_str(&render_search_form(page));
    html.push_str("<table class=\"persons\">\n<thead>\n<tr>");
    for field in SortField::ALL {
        html.push_str(&render_sort_header(page, field));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for person in page.persons {
        html.push_str(&render_person_row(person));
    }
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

fn render_search_form(page: &PersonsPage<'_>) -> String {
    let options: String = SearchField::ALL
        .iter()
        .map(|field| {
            let selected = if field.key() == page.search_by {
                " selected"
            } else {
                ""
            };
            format!(
                "<option value=\"{}\"{selected}>{}</option>",
                field.key(),
                escape_html(field.label())
            )
        })
        .collect();

    format!(
        "<form action=\"{INDEX_ROUTE}\" method=\"get\">\n\
         <select name=\"searchBy\">{options}</select>\n\
         <input type=\"search\" name=\"searchString\" value=\"{}\">\n\
         <button type=\"submit\">Search</button>\n\
         <a href=\"{INDEX_ROUTE}\">Clear all</a>\n\
         </form>\n",
        escape_html(page.search_string)
    )
}

fn render_sort_header(page: &PersonsPage<'_>, field: SortField) -> String {
    let (next_order, marker) = match page.sort {
        Some((current, order)) if current == field => (
            order.toggled(),
            match order {
                SortOrder::Asc => " &#9650;",
                SortOrder::Desc => " &#9660;",
            },
        ),
        _ => (SortOrder::Asc, ""),
    };
    let href = index_href(page.search_by, page.search_string, field, next_order);
    format!(
        "<th><a href=\"{}\">{}</a>{marker}</th>",
        escape_html(&href),
        escape_html(field.label())
    )
}

/// Link back to the list page keeping the current search and ordering by
/// `field`.
pub(crate) fn index_href(
    search_by: &str,
    search_string: &str,
    field: SortField,
    order: SortOrder,
) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("searchBy", search_by)
        .append_pair("searchString", search_string)
        .append_pair("sortBy", field.key())
        .append_pair("sortOrder", order.as_str())
        .finish();
    format!("{INDEX_ROUTE}?{query}")
}

fn render_person_row(person: &PersonResponse) -> String {
    let cells = [
        text_cell(person.person_name.as_deref()),
        text_cell(person.email.as_deref()),
        person
            .date_of_birth
            .map(|dob| dob.format(DISPLAY_DATE_FORMAT).to_string())
            .unwrap_or_default(),
        person.age.map(|age| age.to_string()).unwrap_or_default(),
        text_cell(person.gender.as_deref()),
        text_cell(person.country.as_deref()),
        text_cell(person.address.as_deref()),
        (if person.receive_newsletter { "Yes" } else { "No" }).to_string(),
    ];
    let cells: String = cells
        .iter()
        .map(|cell| format!("<td>{cell}</td>"))
        .collect();
    format!("<tr>{cells}</tr>\n")
}

fn text_cell(value: Option<&str>) -> String {
    value.map(escape_html).unwrap_or_default()
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
