//! Self-contained HTML viewer for the generated diagram.
//!
//! The page embeds the Mermaid diagram text verbatim and renders it
//! client-side, with zoom controls and an SVG download action. No server
//! component; the document works from a `file://` URL.

const VIEWER_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{title}}</title>
<style>
  body {
    margin: 0;
    font-family: -apple-system, "Segoe UI", Roboto, sans-serif;
    background: #fafafa;
    color: #1f2430;
  }
  header {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.75rem 1.25rem;
    background: #fff;
    border-bottom: 1px solid #e3e5ea;
    position: sticky;
    top: 0;
  }
  header h1 {
    font-size: 1rem;
    font-weight: 600;
    margin: 0 auto 0 0;
  }
  button {
    border: 1px solid #c9cdd6;
    border-radius: 4px;
    background: #fff;
    padding: 0.3rem 0.7rem;
    font-size: 0.85rem;
    cursor: pointer;
  }
  button:hover { background: #f0f2f5; }
  #canvas {
    overflow: auto;
    padding: 2rem;
  }
  #diagram {
    transform-origin: top left;
  }
</style>
</head>
<body>
<header>
  <h1>{{title}}</h1>
  <button id="zoom-out" title="Zoom out">&minus;</button>
  <button id="zoom-reset" title="Reset zoom">100%</button>
  <button id="zoom-in" title="Zoom in">+</button>
  <button id="download" title="Download SVG">Download SVG</button>
</header>
<div id="canvas">
  <div id="diagram">
    <pre class="mermaid">{{diagram}}</pre>
  </div>
</div>
<script type="module">
  import mermaid from "https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.esm.min.mjs";
  mermaid.initialize({ startOnLoad: true, theme: "neutral" });

  const MIN_SCALE = 0.1;
  const STEP = 0.1;
  let scale = 1;
  const diagram = document.getElementById("diagram");

  const apply = () => {
    diagram.style.transform = `scale(${scale})`;
    document.getElementById("zoom-reset").textContent = `${Math.round(scale * 100)}%`;
  };

  document.getElementById("zoom-in").addEventListener("click", () => {
    scale += STEP;
    apply();
  });
  document.getElementById("zoom-out").addEventListener("click", () => {
    // Clamp so zoom-out never reaches zero or below
    scale = Math.max(MIN_SCALE, scale - STEP);
    apply();
  });
  document.getElementById("zoom-reset").addEventListener("click", () => {
    scale = 1;
    apply();
  });

  document.getElementById("download").addEventListener("click", () => {
    const svg = diagram.querySelector("svg");
    if (!svg) return;
    const source = new XMLSerializer().serializeToString(svg);
    const blob = new Blob([source], { type: "image/svg+xml;charset=utf-8" });
    const url = URL.createObjectURL(blob);
    const link = document.createElement("a");
    link.href = url;
    link.download = "schema.svg";
    link.click();
    URL.revokeObjectURL(url);
  });
</script>
</body>
</html>
"#;

/// Build the viewer document embedding the given diagram text.
///
/// The diagram is HTML-escaped before embedding; Mermaid reads the text
/// content of the `<pre>` element, so escaped entities render back to the
/// original notation.
pub fn export_viewer(diagram: &str, title: &str) -> String {
    VIEWER_TEMPLATE
        .replace("{{title}}", &escape_html(title))
        .replace("{{diagram}}", &escape_html(diagram))
}

/// Escape the characters HTML treats specially.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
