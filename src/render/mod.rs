pub mod html;

pub use html::{image_name, render_index_page};
