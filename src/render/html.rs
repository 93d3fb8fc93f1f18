/// Local filename of the `index`-th downloaded image.
pub fn image_name(index: usize) -> String {
    format!("img{}", index)
}

/// Render the viewer page: one `<img>` per downloaded image, in download order.
pub fn render_index_page(count: usize) -> String {
    const TEMPLATE: &str = "<html>\n<body>__IMAGES__</body>\n</html>\n";

    let images: String = (0..count)
        .map(|n| format!(r#"<img src="{}">"#, image_name(n)))
        .collect();

    TEMPLATE.replace("__IMAGES__", &images)
}
