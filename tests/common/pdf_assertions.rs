use lopdf::{Dictionary, Document as LopdfDocument, Object, Stream};

fn resolve_dict<'a>(doc: &'a LopdfDocument, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        other => other.as_dict().ok(),
    }
}

fn first_page(doc: &LopdfDocument) -> &Dictionary {
    let page_id = *doc.get_pages().values().next().expect("document has no pages");
    doc.get_dictionary(page_id).expect("page is not a dictionary")
}

/// The MediaBox of the first page as `[x0, y0, x1, y1]`
pub fn media_box(doc: &LopdfDocument) -> Vec<f32> {
    first_page(doc)
        .get(b"MediaBox")
        .and_then(Object::as_array)
        .map(|arr| arr.iter().filter_map(|o| o.as_float().ok()).collect())
        .unwrap_or_default()
}

/// Every string shown with `Tj` on the first page, in paint order
pub fn shown_strings(doc: &LopdfDocument) -> Vec<Vec<u8>> {
    let page_id = *doc.get_pages().values().next().expect("document has no pages");
    let content = doc
        .get_and_decode_page_content(page_id)
        .expect("page content should decode");
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first()?.as_str().ok().map(<[u8]>::to_vec))
        .collect()
}

/// Operators of the first page content stream, in order
pub fn operators(doc: &LopdfDocument) -> Vec<String> {
    let page_id = *doc.get_pages().values().next().expect("document has no pages");
    doc.get_and_decode_page_content(page_id)
        .expect("page content should decode")
        .operations
        .into_iter()
        .map(|op| op.operator)
        .collect()
}

/// An image XObject of the first page, by resource name
pub fn image_xobject<'a>(doc: &'a LopdfDocument, name: &str) -> Option<&'a Stream> {
    let resources = resolve_dict(doc, first_page(doc).get(b"Resources").ok()?)?;
    let xobjects = resolve_dict(doc, resources.get(b"XObject").ok()?)?;
    let id = xobjects.get(name.as_bytes()).ok()?.as_reference().ok()?;
    doc.get_object(id).ok()?.as_stream().ok()
}

/// Raw 8-bit samples of an image XObject with its width and height
pub fn image_samples(stream: &Stream) -> (usize, usize, Vec<u8>) {
    let width = stream.dict.get(b"Width").and_then(Object::as_i64).unwrap() as usize;
    let height = stream.dict.get(b"Height").and_then(Object::as_i64).unwrap() as usize;
    let data = if stream.dict.has(b"Filter") {
        stream.decompressed_content().expect("image stream should inflate")
    } else {
        stream.content.clone()
    };
    (width, height, data)
}

/// Decodes the QR code embedded as a grayscale image XObject
pub fn decode_qr(stream: &Stream) -> String {
    let (width, height, samples) = image_samples(stream);
    assert_eq!(samples.len(), width * height, "QR image should be 8-bit gray");

    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(width, height, |x, y| samples[y * width + x]);
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one QR code");
    let (_, content) = grids[0].decode().expect("QR code should decode");
    content
}
