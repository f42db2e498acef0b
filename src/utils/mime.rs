//! MIME type inference from file names.
//!
//! The extension table is pinned here rather than read from the host's
//! `mime.types`, so generated tables are identical on every machine.
//! Nothing is ever read from disk: inference is a pure function of the name.

/// Common MIME type constants.
pub mod types {
    // Overrides
    pub const JAVASCRIPT: &str = "text/javascript";
    pub const JSON: &str = "application/json";

    // Text
    pub const HTML: &str = "text/html";
    pub const CSS: &str = "text/css";
    pub const PLAIN: &str = "text/plain";
    pub const CSV: &str = "text/csv";
    pub const TSV: &str = "text/tab-separated-values";
    pub const MARKDOWN: &str = "text/markdown";
    pub const XML: &str = "text/xml";
    pub const CALENDAR: &str = "text/calendar";
    pub const VTT: &str = "text/vtt";
    pub const RTF: &str = "text/rtf";
    pub const PYTHON: &str = "text/x-python";

    // Application
    pub const XML_APP: &str = "application/xml";
    pub const MANIFEST: &str = "application/manifest+json";
    pub const PDF: &str = "application/pdf";
    pub const POSTSCRIPT: &str = "application/postscript";
    pub const OCTET_STREAM: &str = "application/octet-stream";
    pub const WASM: &str = "application/wasm";
    pub const ZIP: &str = "application/zip";
    pub const TAR: &str = "application/x-tar";
    pub const SH: &str = "application/x-sh";
    pub const TEX: &str = "application/x-tex";
    pub const MSWORD: &str = "application/msword";
    pub const EXCEL: &str = "application/vnd.ms-excel";
    pub const POWERPOINT: &str = "application/vnd.ms-powerpoint";
    pub const EOT: &str = "application/vnd.ms-fontobject";
    pub const M3U: &str = "application/vnd.apple.mpegurl";

    // Images
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/vnd.microsoft.icon";
    pub const BMP: &str = "image/bmp";
    pub const TIFF: &str = "image/tiff";
    pub const HEIC: &str = "image/heic";
    pub const HEIF: &str = "image/heif";

    // Audio
    pub const MP3: &str = "audio/mpeg";
    pub const WAV: &str = "audio/x-wav";
    pub const AAC: &str = "audio/aac";
    pub const OPUS: &str = "audio/opus";
    pub const AIFF: &str = "audio/x-aiff";
    pub const BASIC: &str = "audio/basic";
    pub const GPP_AUDIO: &str = "audio/3gpp";

    // Video
    pub const MP4: &str = "video/mp4";
    pub const MPEG: &str = "video/mpeg";
    pub const WEBM: &str = "video/webm";
    pub const AVI: &str = "video/x-msvideo";
    pub const MOV: &str = "video/quicktime";

    // Fonts
    pub const WOFF: &str = "font/woff";
    pub const WOFF2: &str = "font/woff2";
    pub const TTF: &str = "font/ttf";
    pub const OTF: &str = "font/otf";

    // Mail
    pub const RFC822: &str = "message/rfc822";
}

/// Infer the MIME type of a file name.
///
/// `.js` and `.map` are fixed overrides checked before the table. Source maps
/// have no registered type; they are served as `application/json`.
pub fn infer(path: &str) -> Option<&'static str> {
    if path.ends_with(".js") {
        return Some(types::JAVASCRIPT);
    }
    if path.ends_with(".map") {
        return Some(types::JSON);
    }
    guess(path)
}

/// Table lookup for a file name, without the overrides.
///
/// Suffix aliases such as `.tgz` are expanded first, then one transfer
/// encoding (`.gz`, `.br`, ...) is peeled so `app.css.gz` reports `text/css`.
pub fn guess(path: &str) -> Option<&'static str> {
    let (base, ext) = split_extension(path);
    let mut base = base.to_string();
    let mut ext = ext.map(str::to_string);

    while let Some(alias) = ext.as_deref().and_then(suffix_alias) {
        let joined = format!("{base}{alias}");
        let (b, e) = split_extension(&joined);
        base = b.to_string();
        ext = e.map(str::to_string);
    }

    if ext.as_deref().is_some_and(is_encoding) {
        ext = split_extension(&base).1.map(str::to_string);
    }

    from_extension(ext.as_deref())
}

/// Split a path into base and extension (without the dot).
///
/// Only the last path segment is considered, and leading dots do not start
/// an extension: `.htaccess` has none, `..a.b` has `b`.
pub fn split_extension(path: &str) -> (&str, Option<&str>) {
    let name_start = path.rfind('/').map_or(0, |i| i + 1);
    if let Some(dot) = path.rfind('.')
        && dot >= name_start
        && path[name_start..dot].bytes().any(|b| b != b'.')
    {
        return (&path[..dot], Some(&path[dot + 1..]));
    }
    (path, None)
}

/// Expansion of compound suffixes, applied repeatedly before lookup.
fn suffix_alias(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "svgz" => Some(".svg.gz"),
        "tgz" | "taz" | "tz" => Some(".tar.gz"),
        "tbz2" => Some(".tar.bz2"),
        "txz" => Some(".tar.xz"),
        _ => None,
    }
}

/// Transfer encodings. Case-sensitive: `.Z` is compress, `.z` is not.
fn is_encoding(ext: &str) -> bool {
    matches!(ext, "gz" | "Z" | "bz2" | "xz" | "br")
}

/// Look up an extension (without the dot) in the pinned table.
pub fn from_extension(ext: Option<&str>) -> Option<&'static str> {
    let ext = ext?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        // Web / Text
        "html" | "htm" => types::HTML,
        "css" => types::CSS,
        "mjs" | "js" => types::JAVASCRIPT,
        "json" => types::JSON,
        "webmanifest" => types::MANIFEST,
        "xml" => types::XML,
        "xsl" | "rdf" | "wsdl" | "xpdl" => types::XML_APP,
        "txt" | "bat" | "c" | "h" | "ksh" | "pl" | "srt" => types::PLAIN,
        "csv" => types::CSV,
        "tsv" => types::TSV,
        "md" | "markdown" => types::MARKDOWN,
        "ics" => types::CALENDAR,
        "vtt" => types::VTT,
        "rtf" => types::RTF,
        "py" => types::PYTHON,

        // Images
        "png" => types::PNG,
        "jpg" | "jpe" | "jpeg" => types::JPEG,
        "gif" => types::GIF,
        "webp" => types::WEBP,
        "avif" => types::AVIF,
        "svg" => types::SVG,
        "ico" => types::ICO,
        "bmp" => types::BMP,
        "tif" | "tiff" => types::TIFF,
        "heic" => types::HEIC,
        "heif" => types::HEIF,

        // Audio
        "mp3" | "mp2" => types::MP3,
        "wav" => types::WAV,
        "aac" | "adts" | "loas" | "ass" => types::AAC,
        "opus" => types::OPUS,
        "aif" | "aifc" | "aiff" => types::AIFF,
        "au" | "snd" => types::BASIC,
        "3gp" | "3gpp" => types::GPP_AUDIO,

        // Video
        "mp4" => types::MP4,
        "mpeg" | "mpg" | "mpe" | "m1v" | "mpa" => types::MPEG,
        "webm" => types::WEBM,
        "avi" => types::AVI,
        "mov" | "qt" => types::MOV,

        // Fonts
        "woff" => types::WOFF,
        "woff2" => types::WOFF2,
        "ttf" => types::TTF,
        "otf" => types::OTF,
        "eot" => types::EOT,

        // Documents / Binary
        "pdf" => types::PDF,
        "ps" | "ai" | "eps" => types::POSTSCRIPT,
        "doc" | "dot" => types::MSWORD,
        "xls" | "xlb" => types::EXCEL,
        "ppt" | "pot" | "ppa" | "pps" | "pwz" => types::POWERPOINT,
        "m3u" | "m3u8" => types::M3U,
        "bin" | "a" | "dll" | "exe" | "o" | "obj" | "so" => types::OCTET_STREAM,
        "wasm" => types::WASM,
        "zip" => types::ZIP,
        "tar" => types::TAR,
        "sh" => types::SH,
        "tex" => types::TEX,
        "eml" | "mht" | "mhtml" | "nws" => types::RFC822,

        _ => return None,
    };
    Some(mime)
}
