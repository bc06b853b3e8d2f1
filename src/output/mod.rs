mod html;
mod json;
mod table;

pub(crate) use html::render_page;
pub(crate) use json::output_fields_json;
pub(crate) use table::render_fields_table;
