//! Table rendering for compose documents and the service catalog.

mod catalog_ext;
mod document_ext;

pub use self::{catalog_ext::ServiceTemplateListExt, document_ext::ComposeDocumentExt};

fn new_table() -> comfy_table::Table {
    let mut table = comfy_table::Table::new();
    let _unused = table
        .load_preset(comfy_table::presets::NOTHING)
        .set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
    table
}
