//! The single page served at `/`: four panels, each posting JSON to its
//! `/api/*` endpoint from inline script.

const TITLE_MARKER: &str = "{{TITLE}}";

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{{TITLE}}</title>
  <style>
    body { background: #0a0f1a; color: white; font-family: Arial, sans-serif; margin: 0; }
    .container { padding: 20px; max-width: 900px; margin: auto; }
    h1 { font-size: 32px; }
    .panel { background: #111827; padding: 20px; border-radius: 16px; margin-top: 20px; box-shadow: 0 0 20px #00eaff33; }
    .btn { padding: 12px 20px; background: #00eaff; color: #000; border-radius: 12px; border: none; cursor: pointer; margin-top: 10px; }
    textarea, input { width: 100%; box-sizing: border-box; padding: 10px; border-radius: 10px; border: none; margin-top: 10px; }
    video, img { width: 100%; margin-top: 10px; border-radius: 10px; }
    .error { color: #ff6b6b; }
  </style>
</head>
<body>
  <div class="container">
    <h1>{{TITLE}}: Voice + Vision + Chat</h1>

    <div class="panel">
      <h2>Chat</h2>
      <textarea id="chatInput" placeholder="Ask me anything..."></textarea>
      <button class="btn" id="chatSend">Send</button>
      <div id="chatBox" style="margin-top:20px;"></div>
    </div>

    <div class="panel">
      <h2>Image Generator</h2>
      <input id="imgPrompt" placeholder="Describe an image..." />
      <button class="btn" id="imgGenerate">Generate</button>
      <img id="generatedImage" alt="" />
    </div>

    <div class="panel">
      <h2>Camera Vision</h2>
      <video id="cam" autoplay playsinline></video>
      <button class="btn" id="visionAnalyze">Analyze</button>
      <img id="snap" alt="" />
      <p id="visionResult"></p>
    </div>

    <div class="panel">
      <h2>Realtime Voice</h2>
      <button class="btn" id="voiceStart">Start Talking</button>
      <p id="voiceStatus"></p>
      <p id="voiceOut"></p>
    </div>
  </div>

  <script>
    async function postJson(path, body) {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(body)
      });
      const data = await res.json().catch(() => ({}));
      if (!res.ok) {
        throw new Error(data.error || ('HTTP ' + res.status));
      }
      return data;
    }

    function showError(el, err) {
      el.className = 'error';
      el.innerText = err.message;
    }

    document.getElementById('chatSend').addEventListener('click', async () => {
      const q = document.getElementById('chatInput').value;
      const entry = document.createElement('p');
      document.getElementById('chatBox').appendChild(entry);
      try {
        const data = await postJson('/api/chat', { message: q });
        entry.innerText = 'You: ' + q + '\n' + document.title + ': ' + data.reply;
      } catch (err) {
        showError(entry, err);
      }
    });

    document.getElementById('imgGenerate').addEventListener('click', async () => {
      const prompt = document.getElementById('imgPrompt').value;
      const img = document.getElementById('generatedImage');
      try {
        const data = await postJson('/api/image', { prompt });
        img.src = data.url;
      } catch (err) {
        img.alt = err.message;
      }
    });

    if (navigator.mediaDevices && navigator.mediaDevices.getUserMedia) {
      navigator.mediaDevices.getUserMedia({ video: true }).then(stream => {
        document.getElementById('cam').srcObject = stream;
      }).catch(err => {
        showError(document.getElementById('visionResult'), err);
      });
    }

    document.getElementById('visionAnalyze').addEventListener('click', async () => {
      const video = document.getElementById('cam');
      const result = document.getElementById('visionResult');
      const canvas = document.createElement('canvas');
      canvas.width = video.videoWidth;
      canvas.height = video.videoHeight;
      canvas.getContext('2d').drawImage(video, 0, 0);
      const dataUrl = canvas.toDataURL();
      document.getElementById('snap').src = dataUrl;
      try {
        const data = await postJson('/api/vision', { image: dataUrl });
        result.className = '';
        result.innerText = data.description;
      } catch (err) {
        showError(result, err);
      }
    });

    document.getElementById('voiceStart').addEventListener('click', async () => {
      const status = document.getElementById('voiceStatus');
      const out = document.getElementById('voiceOut');
      try {
        const data = await postJson('/api/voice', {});
        status.innerText = data.text;
      } catch (err) {
        showError(status, err);
      }
      const Recognition = window.SpeechRecognition || window.webkitSpeechRecognition;
      if (!Recognition) {
        out.innerText = 'Speech recognition is not supported in this browser.';
        return;
      }
      const recognition = new Recognition();
      recognition.lang = 'en-US';
      recognition.onresult = e => {
        out.innerText = e.results[0][0].transcript;
      };
      recognition.start();
    });
  </script>
</body>
</html>
"#;

/// Renders the page with `title` in the document title and heading.
pub fn render(title: &str) -> String {
    PAGE_TEMPLATE.replace(TITLE_MARKER, &escape_html(title))
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
