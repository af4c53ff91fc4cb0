//! HTML for the gallery page.

use base64::{engine::general_purpose, Engine as _};

use crate::models::ImageRecord;
use crate::utils::http_helpers::html_escape;

/// Form field that carries the uploaded file.
pub const UPLOAD_FIELD: &str = "photo";

/// Inline `data:` URI embedding the record's bytes with its declared type.
pub fn data_uri(record: &ImageRecord) -> String {
    format!(
        "data:{};base64,{}",
        record.content_type,
        general_purpose::STANDARD.encode(&record.data)
    )
}

/// Renders the full page: the upload form followed by every record, in the
/// order given.
pub fn render_gallery(records: &[ImageRecord]) -> String {
    let images = if records.is_empty() {
        r#"<p class="empty">No photos uploaded yet.</p>"#.to_string()
    } else {
        records
            .iter()
            .map(|record| {
                format!(
                    r#"<figure class="photo"><img src="{src}" alt="{id}"></figure>"#,
                    src = html_escape(&data_uri(record)),
                    id = html_escape(&record.id),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Photo Gallery</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; }}
.gallery {{ display: flex; flex-wrap: wrap; gap: 1rem; }}
.photo {{ margin: 0; }}
.photo img {{ max-width: 300px; max-height: 300px; border-radius: 4px; }}
.empty {{ color: #6b7280; font-style: italic; }}
</style>
</head>
<body>
<h1>Photo Gallery</h1>
<form action="/upload" method="post" enctype="multipart/form-data">
<input type="file" name="{field}" accept="image/*" required>
<button type="submit">Upload</button>
</form>
<div class="gallery">
{images}
</div>
</body>
</html>
"#,
        field = UPLOAD_FIELD,
        images = images,
    )
}
