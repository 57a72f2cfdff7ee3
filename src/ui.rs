use crate::stats::Progress;

pub fn render_index(progress: &Progress) -> String {
    INDEX_HTML
        .replace("{{DATE}}", &progress.date)
        .replace("{{PERCENT}}", &progress.percent.to_string())
        .replace("{{TOTAL}}", &format!("{:.0}", progress.total_ml))
        .replace("{{REMAINING}}", &format!("{:.0}", progress.remaining_ml))
        .replace("{{CUPS}}", &progress.cups.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Hydration Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef6fb;
      --bg-2: #bfe0f5;
      --ink: #22303a;
      --muted: #5d6b76;
      --accent: #0b74ff;
      --accent-soft: rgba(11, 116, 255, 0.12);
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --surface: white;
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    .theme-dark {
      --bg-1: #101820;
      --bg-2: #16344a;
      --ink: #e6eef5;
      --muted: #93a4b2;
      --accent: #3f95ff;
      --accent-soft: rgba(63, 149, 255, 0.18);
      --accent-2: #9fc2dd;
      --card: rgba(22, 32, 42, 0.92);
      --surface: #1b2733;
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), var(--bg-2) 130%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: start;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 1rem;
    }

    .theme-controls {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: var(--surface);
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat span {
      display: block;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.percent {
      color: var(--accent);
    }

    .progress-card {
      background: var(--surface);
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 12px;
    }

    .progress-track {
      height: 18px;
      border-radius: 999px;
      background: var(--accent-soft);
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      width: 0%;
      border-radius: 999px;
      background: var(--accent);
      transition: width 300ms ease;
    }

    .actions {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-add {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(11, 116, 255, 0.3);
    }

    .btn-sub {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    .btn-small {
      padding: 10px 16px;
      font-size: 0.9rem;
      background: var(--accent-soft);
      color: var(--accent-2);
      box-shadow: none;
    }

    .chart-area {
      display: grid;
      gap: 16px;
    }

    .chart-header h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .chart-card {
      background: var(--surface);
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #chart {
      width: 100%;
      height: 220px;
      display: block;
    }

    .chart-track {
      fill: var(--accent-soft);
    }

    .chart-bar {
      fill: var(--accent);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      text-anchor: middle;
    }

    .settings-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
      align-items: end;
    }

    .field {
      display: grid;
      gap: 6px;
    }

    .field label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    input, select {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 12px;
      font-size: 1rem;
      font-family: inherit;
      background: var(--surface);
      color: var(--ink);
    }

    .data-row {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 12px;
    }

    .data-row a {
      color: var(--accent);
      font-weight: 600;
      text-decoration: none;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    #toast-container {
      position: fixed;
      bottom: 24px;
      left: 50%;
      transform: translateX(-50%);
      display: grid;
      gap: 8px;
      z-index: 10;
    }

    .toast {
      background: var(--accent-2);
      color: white;
      border-radius: 12px;
      padding: 12px 18px;
      font-size: 0.95rem;
      box-shadow: 0 12px 30px rgba(0, 0, 0, 0.25);
      opacity: 0;
      transform: translateY(8px);
      transition: opacity 250ms ease, transform 250ms ease;
    }

    .toast.show {
      opacity: 1;
      transform: translateY(0);
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Hydration Tracker</h1>
        <p class="subtitle">Log each glass of water and keep up with your daily target.</p>
      </div>
      <div class="theme-controls">
        <select id="theme-select" aria-label="Theme">
          <option value="system">System</option>
          <option value="light">Light</option>
          <option value="dark">Dark</option>
        </select>
        <button class="btn-small" id="theme-toggle" type="button" aria-pressed="false">Toggle</button>
      </div>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Date</span>
        <span id="date" class="value">{{DATE}}</span>
      </div>
      <div class="stat">
        <span class="label">Today</span>
        <span class="value"><span id="total">{{TOTAL}}</span> ml</span>
      </div>
      <div class="stat">
        <span class="label">Cups</span>
        <span id="cups" class="value">{{CUPS}}</span>
      </div>
      <div class="stat">
        <span class="label">Remaining</span>
        <span class="value"><span id="remaining">{{REMAINING}}</span> ml</span>
      </div>
    </section>

    <section class="progress-card">
      <span class="label"><span id="percent" class="value percent">{{PERCENT}}</span><span class="value percent">%</span> of daily target</span>
      <div class="progress-track">
        <div class="progress-fill" id="progress-fill"></div>
      </div>
    </section>

    <section class="actions">
      <form id="add-form" method="post" action="/glass/add">
        <button class="btn-add" id="add-glass" type="submit">Add a glass</button>
      </form>
      <form id="sub-form" method="post" action="/glass/subtract">
        <button class="btn-sub" id="subtract-glass" type="submit">Remove a glass</button>
      </form>
    </section>

    <section class="chart-area">
      <div class="chart-header">
        <h2>Last 7 days</h2>
        <p class="subtitle">Daily intake in ml.</p>
      </div>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 600 220" aria-label="Intake history chart" role="img"></svg>
      </div>
    </section>

    <section class="chart-area">
      <div class="chart-header">
        <h2>Settings</h2>
      </div>
      <form id="settings-form" class="settings-grid">
        <div class="field">
          <label for="daily-target">Daily target (ml)</label>
          <input id="daily-target" type="number" min="1" step="50" />
        </div>
        <div class="field">
          <label for="cup-size">Cup size (ml)</label>
          <input id="cup-size" type="number" min="1" step="10" />
        </div>
        <div class="field">
          <label for="reminder-minutes">Reminder (minutes)</label>
          <input id="reminder-minutes" type="number" min="1" step="5" placeholder="off" />
        </div>
        <button class="btn-small" type="submit">Save settings</button>
      </form>
      <div class="data-row">
        <a id="export-btn" href="/api/export" download="hydration-data.json">Export data</a>
        <label class="btn-small" for="import-file" style="cursor:pointer">Import data</label>
        <input id="import-file" type="file" accept="application/json" style="display:none" />
      </div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Intake is kept per calendar day; history holds the last 30 days.</p>
  </main>

  <div id="toast-container"></div>

  <script>
    const dateEl = document.getElementById('date');
    const totalEl = document.getElementById('total');
    const cupsEl = document.getElementById('cups');
    const remainingEl = document.getElementById('remaining');
    const percentEl = document.getElementById('percent');
    const fillEl = document.getElementById('progress-fill');
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const dailyTargetEl = document.getElementById('daily-target');
    const cupSizeEl = document.getElementById('cup-size');
    const reminderMinutesEl = document.getElementById('reminder-minutes');
    const themeSelectEl = document.getElementById('theme-select');
    const themeToggleEl = document.getElementById('theme-toggle');

    const CHART_HEIGHT = 220;
    const CHART_PADDING = 12;

    let currentTheme = 'system';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const showToast = (message, timeout = 3500) => {
      const container = document.getElementById('toast-container');
      const toast = document.createElement('div');
      toast.className = 'toast';
      toast.textContent = message;
      container.appendChild(toast);
      requestAnimationFrame(() => toast.classList.add('show'));
      setTimeout(() => {
        toast.classList.remove('show');
        setTimeout(() => toast.remove(), 250);
      }, timeout);
    };

    const updateToday = (data) => {
      dateEl.textContent = data.date;
      totalEl.textContent = Math.round(data.total_ml);
      cupsEl.textContent = data.cups;
      remainingEl.textContent = Math.round(data.remaining_ml);
      percentEl.textContent = data.percent;
      fillEl.style.width = `${data.percent}%`;
    };

    const renderBars = (bars) => {
      const trackHeight = CHART_HEIGHT - CHART_PADDING * 2;
      chartEl.innerHTML = bars
        .map((bar) => {
          const track = `<rect class="chart-track" x="${bar.x}" y="${CHART_PADDING}" width="${bar.width}" height="${trackHeight}" rx="4" />`;
          const fill = `<rect class="chart-bar" x="${bar.x}" y="${bar.y}" width="${bar.width}" height="${bar.height}" rx="4" />`;
          const label = `<text class="chart-label" x="${bar.x + bar.width / 2}" y="${CHART_HEIGHT - 2}">${bar.label}</text>`;
          return track + fill + label;
        })
        .join('');
    };

    const loadToday = async () => {
      const res = await fetch('/api/today');
      if (!res.ok) {
        throw new Error('Unable to load today data');
      }
      updateToday(await res.json());
    };

    const loadHistory = async () => {
      const res = await fetch('/api/history');
      if (!res.ok) {
        throw new Error('Unable to load history');
      }
      const history = await res.json();
      renderBars(history.bars);
    };

    const refresh = async () => {
      await Promise.all([loadToday(), loadHistory()]);
    };

    const sendGlass = async (action) => {
      setStatus('Saving...', 'info');
      const res = await fetch(`/api/glass/${action}`, { method: 'POST' });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      const data = await res.json();
      updateToday(data);
      if (data.warning) {
        showToast(data.warning, 4000);
      }
      loadHistory().catch((err) => setStatus(err.message, 'error'));
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const applyTheme = (theme) => {
      currentTheme = theme || 'system';
      themeSelectEl.value = currentTheme;
      let dark = currentTheme === 'dark';
      if (currentTheme === 'system' && window.matchMedia) {
        dark = window.matchMedia('(prefers-color-scheme: dark)').matches;
      }
      document.documentElement.classList.toggle('theme-dark', dark);
      themeToggleEl.setAttribute('aria-pressed', String(dark));
    };

    const fillSettingsForm = (settings) => {
      dailyTargetEl.value = settings.dailyTargetMl;
      cupSizeEl.value = settings.cupSizeMl;
      reminderMinutesEl.value = settings.reminderMinutes || '';
      applyTheme(settings.theme || 'system');
    };

    const loadSettings = async () => {
      const res = await fetch('/api/settings');
      if (!res.ok) {
        throw new Error('Unable to load settings');
      }
      fillSettingsForm(await res.json());
    };

    const postSettings = async (update) => {
      const res = await fetch('/api/settings', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(update)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Unable to save settings');
      }
      fillSettingsForm(await res.json());
    };

    const requestNotificationPermission = () => {
      if (!('Notification' in window)) {
        return;
      }
      if (Notification.permission === 'default') {
        Notification.requestPermission().then((permission) => {
          if (permission === 'granted') {
            showToast('System notifications enabled');
          }
        });
      }
    };

    const postVisibility = (visible) => {
      fetch('/api/visibility', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ visible })
      }).catch(() => {});
    };

    const pollSignals = async () => {
      try {
        const res = await fetch('/api/signals');
        if (!res.ok) {
          return;
        }
        const signals = await res.json();
        if (signals.reminder_due) {
          showToast('Time to drink! Grab a glass of water.', 4000);
          if ('Notification' in window && Notification.permission === 'granted') {
            try {
              new Notification('Hydration reminder', { body: 'Time to drink some water.' });
            } catch (err) { /* toast already shown */ }
          }
        }
      } catch (err) { /* retried on the next poll */ }
    };

    document.getElementById('add-form').addEventListener('submit', (event) => {
      event.preventDefault();
      sendGlass('add').catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('sub-form').addEventListener('submit', (event) => {
      event.preventDefault();
      sendGlass('subtract').catch((err) => setStatus(err.message, 'error'));
    });

    // The server treats each update as a full form write: an absent reminder
    // interval disables reminders, so theme changes post the form too.
    const collectSettings = () => {
      const reminder = Number(reminderMinutesEl.value);
      return {
        dailyTargetMl: Number(dailyTargetEl.value) || null,
        cupSizeMl: Number(cupSizeEl.value) || null,
        reminderMinutes: Number.isFinite(reminder) && reminder > 0 ? reminder : null
      };
    };

    document.getElementById('settings-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const update = collectSettings();
      postSettings(update)
        .then(() => {
          showToast('Settings saved');
          if (update.reminderMinutes) {
            requestNotificationPermission();
          }
          return loadToday();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    themeSelectEl.addEventListener('change', () => {
      postSettings({ ...collectSettings(), theme: themeSelectEl.value })
        .catch((err) => setStatus(err.message, 'error'));
    });

    themeToggleEl.addEventListener('click', () => {
      const next = document.documentElement.classList.contains('theme-dark') ? 'light' : 'dark';
      postSettings({ ...collectSettings(), theme: next })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('import-file').addEventListener('change', (event) => {
      const file = event.target.files && event.target.files[0];
      event.target.value = '';
      if (!file) {
        return;
      }
      file.text()
        .then((raw) => fetch('/api/import', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: raw
        }))
        .then(async (res) => {
          if (!res.ok) {
            const msg = await res.text();
            throw new Error(msg || 'Import failed');
          }
          fillSettingsForm(await res.json());
          showToast('Data imported');
          return refresh();
        })
        .catch((err) => showToast(`Import failed: ${err.message}`, 4000));
    });

    document.addEventListener('visibilitychange', () => postVisibility(!document.hidden));
    if (window.matchMedia) {
      window.matchMedia('(prefers-color-scheme: dark)').addEventListener('change', () => {
        if (currentTheme === 'system') {
          applyTheme('system');
        }
      });
    }

    postVisibility(!document.hidden);
    setInterval(pollSignals, 20 * 1000);
    setInterval(() => refresh().catch(() => {}), 60 * 1000);

    loadSettings().catch((err) => setStatus(err.message, 'error'));
    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
