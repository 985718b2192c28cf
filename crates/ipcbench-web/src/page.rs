//! The static bench page served at `/`.

/// Single-page UI: an iteration input, a Run button, and a pane showing
/// the raw JSON response. Connection state is fetched from `/status` on
/// load and after every run.
pub const INDEX_HTML: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>Microkernel IPC Bench</title>
  </head>
  <body>
    <h1>Microkernel IPC Bench</h1>
    <p id="health">Checking endpoint&hellip;</p>
    <label>Iterations: <input id="iters" value="1000" /></label>
    <button onclick="run()">Run</button>
    <pre id="out"></pre>
    <script>
    async function refreshHealth() {
      const res = await fetch('/status');
      const data = await res.json();
      document.getElementById('health').textContent =
        data.connected ? 'Endpoint: connected' : 'Endpoint: ' + data.error;
    }
    async function run() {
      const iters = document.getElementById('iters').value;
      document.getElementById('out').textContent = 'Running...';
      const res = await fetch('/run?iters=' + encodeURIComponent(iters));
      const data = await res.json();
      document.getElementById('out').textContent = JSON.stringify(data, null, 2);
      refreshHealth();
    }
    refreshHealth();
    </script>
  </body>
</html>
"#;
