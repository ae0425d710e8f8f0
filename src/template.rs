//! Embedded HTML templates for endcard documents.
//!
//! Templates are plain strings with `{{TOKEN}}` placeholders filled by
//! `.replace()` rather than a template engine; this keeps the output
//! byte-for-byte predictable and avoids escaping braces for `format!`.
//! User-controlled strings (the base filename) are HTML-escaped before
//! substitution. Data URLs are substituted verbatim: base64 text contains no
//! HTML-significant characters.

use htmlescape::encode_minimal;

/// Single-orientation endcard, 9:16 framing.
const PORTRAIT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=1, user-scalable=no">
  <title>{{TITLE}} - Portrait Endcard</title>
  <style>
    html, body { margin: 0; padding: 0; width: 100%; height: 100%; background: #000; overflow: hidden; }
    .endcard { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; }
    .endcard .media { width: 100%; height: 100%; object-fit: cover; }
  </style>
</head>
<body>
  <div class="endcard" data-orientation="portrait">
    {{MEDIA_ELEMENT}}
  </div>
  <script>
    (function () {
      function onReady() {
        if (typeof mraid !== 'undefined') { mraid.useCustomClose(true); }
        var video = document.querySelector('video');
        if (video) { video.play().catch(function () {}); }
      }
      if (typeof mraid !== 'undefined' && mraid.getState() === 'loading') {
        mraid.addEventListener('ready', onReady);
      } else {
        onReady();
      }
    })();
  </script>
</body>
</html>
"#;

/// Single-orientation endcard, 16:9 framing.
const LANDSCAPE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=1, user-scalable=no">
  <title>{{TITLE}} - Landscape Endcard</title>
  <style>
    html, body { margin: 0; padding: 0; width: 100%; height: 100%; background: #000; overflow: hidden; }
    .endcard { position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; }
    .endcard .media { width: 100%; height: 100%; object-fit: contain; }
  </style>
</head>
<body>
  <div class="endcard" data-orientation="landscape">
    {{MEDIA_ELEMENT}}
  </div>
  <script>
    (function () {
      function onReady() {
        if (typeof mraid !== 'undefined') { mraid.useCustomClose(true); }
        var video = document.querySelector('video');
        if (video) { video.play().catch(function () {}); }
      }
      if (typeof mraid !== 'undefined' && mraid.getState() === 'loading') {
        mraid.addEventListener('ready', onReady);
      } else {
        onReady();
      }
    })();
  </script>
</body>
</html>
"#;

/// Combined endcard embedding both framings with a client-side toggle.
///
/// The active view follows the device orientation via `matchMedia`, and a
/// corner button lets the viewer flip manually.
const ROTATABLE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=1, user-scalable=no">
  <title>{{TITLE}} - Endcard</title>
  <style>
    html, body { margin: 0; padding: 0; width: 100%; height: 100%; background: #000; overflow: hidden; }
    .view { position: fixed; inset: 0; display: none; align-items: center; justify-content: center; }
    .view.active { display: flex; }
    .view .media { width: 100%; height: 100%; }
    #portrait-view .media { object-fit: cover; }
    #landscape-view .media { object-fit: contain; }
    #rotate-btn { position: fixed; top: 12px; right: 12px; z-index: 10;
      padding: 8px 14px; border: 0; border-radius: 8px;
      background: rgba(255, 255, 255, 0.85); color: #111;
      font: 600 14px system-ui, sans-serif; cursor: pointer; }
  </style>
</head>
<body>
  <div id="portrait-view" class="view active">
    {{PORTRAIT_MEDIA_ELEMENT}}
  </div>
  <div id="landscape-view" class="view">
    {{LANDSCAPE_MEDIA_ELEMENT}}
  </div>
  <button id="rotate-btn" type="button">Rotate</button>
  <script>
    (function () {
      var portrait = document.getElementById('portrait-view');
      var landscape = document.getElementById('landscape-view');
      var manual = false;

      function show(view) {
        portrait.classList.toggle('active', view === 'portrait');
        landscape.classList.toggle('active', view === 'landscape');
        var active = document.querySelector('.view.active video');
        if (active) { active.play().catch(function () {}); }
      }

      function followDevice() {
        if (manual) { return; }
        var wide = window.matchMedia('(orientation: landscape)').matches;
        show(wide ? 'landscape' : 'portrait');
      }

      document.getElementById('rotate-btn').addEventListener('click', function () {
        manual = true;
        show(portrait.classList.contains('active') ? 'landscape' : 'portrait');
      });

      window.matchMedia('(orientation: landscape)').addEventListener('change', followDevice);

      function onReady() {
        if (typeof mraid !== 'undefined') { mraid.useCustomClose(true); }
        followDevice();
      }
      if (typeof mraid !== 'undefined' && mraid.getState() === 'loading') {
        mraid.addEventListener('ready', onReady);
      } else {
        onReady();
      }
    })();
  </script>
</body>
</html>
"#;

/// Build the `<video>` or `<img>` element for a data URL.
///
/// `is_video` comes from the extension heuristic; the element never embeds
/// the filename so only the data URL flows in unescaped.
fn media_element(is_video: bool, data_url: &str) -> String {
    if is_video {
        format!(
            r#"<video class="media" src="{}" autoplay muted loop playsinline></video>"#,
            data_url
        )
    } else {
        format!(r#"<img class="media" src="{}" alt="endcard media">"#, data_url)
    }
}

/// Render a single-orientation document. `landscape` selects the 16:9
/// template, otherwise 9:16.
pub fn render_single(landscape: bool, base_filename: &str, is_video: bool, data_url: &str) -> String {
    let template = if landscape { LANDSCAPE_TEMPLATE } else { PORTRAIT_TEMPLATE };
    template
        .replace("{{TITLE}}", &encode_minimal(base_filename))
        .replace("{{MEDIA_ELEMENT}}", &media_element(is_video, data_url))
}

/// Render the combined rotatable document from two independent data URLs.
pub fn render_rotatable(
    base_filename: &str,
    is_video: bool,
    portrait_data_url: &str,
    landscape_data_url: &str,
) -> String {
    ROTATABLE_TEMPLATE
        .replace("{{TITLE}}", &encode_minimal(base_filename))
        .replace(
            "{{PORTRAIT_MEDIA_ELEMENT}}",
            &media_element(is_video, portrait_data_url),
        )
        .replace(
            "{{LANDSCAPE_MEDIA_ELEMENT}}",
            &media_element(is_video, landscape_data_url),
        )
}
