pub fn render_dashboard(tracked: usize, expiring: usize) -> String {
    DASHBOARD_HTML
        .replace("{{TRACKED}}", &tracked.to_string())
        .replace("{{EXPIRING}}", &expiring.to_string())
}

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Renewal Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f6f4ef;
      --bg-2: #d9e4ec;
      --ink: #28302e;
      --accent: #2f6f4f;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --line: rgba(47, 72, 88, 0.1);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e9eff3 60%, #f3f1ea 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      justify-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.25rem;
    }

    .subtitle {
      margin: 0;
      color: #5f6662;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid var(--line);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #848b87;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    form.domain-form {
      background: white;
      border: 1px solid var(--line);
      border-radius: 20px;
      padding: 20px;
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 12px;
    }

    form.domain-form label {
      display: grid;
      gap: 4px;
      font-size: 0.85rem;
      color: #5f6662;
    }

    form.domain-form input {
      border: 1px solid var(--line);
      border-radius: 10px;
      padding: 9px 10px;
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      align-self: end;
    }

    .btn-quiet {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .btn-danger {
      background: #dc3545;
      color: white;
    }

    .domain-card {
      background: white;
      border: 1px solid var(--line);
      border-radius: 20px;
      padding: 20px;
      display: grid;
      gap: 14px;
    }

    .domain-head {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 18px;
    }

    .domain-head .name {
      font-size: 1.2rem;
      font-weight: 600;
      margin: 0;
    }

    .domain-head .expiry {
      margin: 2px 0 0;
      color: #5f6662;
      font-size: 0.92rem;
    }

    .badge {
      font-size: 0.78rem;
      font-weight: 600;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      padding: 4px 10px;
      border-radius: 999px;
      color: white;
    }

    .progress-circle {
      --percent: 0;
      --status-color: #0d6efd;
      width: 72px;
      height: 72px;
      border-radius: 50%;
      flex-shrink: 0;
      background: conic-gradient(
        var(--status-color) calc(var(--percent) * 1%),
        rgba(47, 72, 88, 0.12) 0
      );
      display: grid;
      place-items: center;
    }

    .progress-circle > span {
      width: 54px;
      height: 54px;
      border-radius: 50%;
      background: white;
      display: grid;
      place-items: center;
      font-size: 0.78rem;
      font-weight: 600;
    }

    .domain-details {
      border-top: 1px solid var(--line);
      padding-top: 12px;
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 8px;
      font-size: 0.92rem;
    }

    .domain-details .label {
      color: #848b87;
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      display: block;
    }

    .domain-actions {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      margin-left: auto;
    }

    dialog {
      border: none;
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 24px;
      width: min(640px, 92vw);
    }

    dialog::backdrop {
      background: rgba(40, 48, 46, 0.45);
    }

    .status {
      font-size: 0.95rem;
      color: #5f6662;
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
      color: #6f6a65;
      font-size: 0.9rem;
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
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Renewal Tracker</h1>
      <p class="subtitle">Keep every domain's expiration date, renewal window, and status in one place.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Tracked domains</span>
        <span id="tracked" class="value">{{TRACKED}}</span>
      </div>
      <div class="stat">
        <span class="label">Expiring soon</span>
        <span id="expiring" class="value">{{EXPIRING}}</span>
      </div>
    </section>

    <section>
      <h2>Add a domain</h2>
      <form id="add-form" class="domain-form">
        <label>Name
          <input name="name" required placeholder="example.com" />
        </label>
        <label>Registrar
          <input name="registrar" placeholder="Namecheap" />
        </label>
        <label>Registered on
          <input name="registration_date" type="date" />
        </label>
        <label>Expires on
          <input name="expiration_date" type="date" required />
        </label>
        <label>Renewal period
          <input name="renewal_period" placeholder="1" />
        </label>
        <label>Renewal price
          <input name="renewal_price" placeholder="12.99" />
        </label>
        <label>Currency
          <input name="currency" placeholder="USD" />
        </label>
        <label>Renewal URL
          <input name="renewal_url" type="url" placeholder="https://..." />
        </label>
        <label>Warning at (days)
          <input name="warning_threshold" type="number" min="0" placeholder="30" />
        </label>
        <label>Danger at (days)
          <input name="danger_threshold" type="number" min="0" placeholder="7" />
        </label>
        <button class="btn-primary" type="submit">Add domain</button>
      </form>
    </section>

    <section>
      <h2>Tracked domains</h2>
      <div id="domains" style="display: grid; gap: 16px;"></div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Status turns amber inside the warning window and red inside the danger window. Renewing projects the expiration forward by the stored period.</p>
  </main>

  <dialog id="edit-dialog">
    <h2>Edit domain</h2>
    <form id="edit-form" class="domain-form">
      <input name="id" type="hidden" />
      <label>Name
        <input name="name" required />
      </label>
      <label>Registrar
        <input name="registrar" />
      </label>
      <label>Registered on
        <input name="registration_date" type="date" />
      </label>
      <label>Expires on
        <input name="expiration_date" type="date" required />
      </label>
      <label>Renewal period
        <input name="renewal_period" />
      </label>
      <label>Renewal price
        <input name="renewal_price" />
      </label>
      <label>Currency
        <input name="currency" />
      </label>
      <label>Renewal URL
        <input name="renewal_url" type="url" />
      </label>
      <label>Warning at (days)
        <input name="warning_threshold" type="number" min="0" />
      </label>
      <label>Danger at (days)
        <input name="danger_threshold" type="number" min="0" />
      </label>
      <button class="btn-primary" type="submit">Save changes</button>
      <button class="btn-quiet" type="button" id="edit-cancel">Cancel</button>
    </form>
  </dialog>

  <script>
    const domainsEl = document.getElementById('domains');
    const statusEl = document.getElementById('status');
    const trackedEl = document.getElementById('tracked');
    const expiringEl = document.getElementById('expiring');
    const editDialog = document.getElementById('edit-dialog');
    const editForm = document.getElementById('edit-form');
    const addForm = document.getElementById('add-form');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const postJson = (path, body) =>
      api(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body || {})
      });

    const formValues = (form) => {
      const values = {};
      for (const [key, value] of new FormData(form).entries()) {
        if (key === 'warning_threshold' || key === 'danger_threshold') {
          if (value !== '') {
            values[key] = Number(value);
          }
        } else {
          values[key] = value;
        }
      }
      return values;
    };

    // Every form on the page goes through this one registration utility.
    const wireForm = (form, submit) => {
      form.addEventListener('submit', (event) => {
        event.preventDefault();
        submit(formValues(form))
          .then(() => {
            setStatus('Saved', 'ok');
            return refresh();
          })
          .catch((err) => setStatus(err.message, 'error'));
      });
    };

    const escapeHtml = (text) =>
      String(text ?? '').replace(/[&<>"']/g, (c) => ({
        '&': '&amp;',
        '<': '&lt;',
        '>': '&gt;',
        '"': '&quot;',
        "'": '&#39;'
      })[c]);

    const detailRow = (label, value) =>
      `<div><span class="label">${label}</span>${escapeHtml(value) || '&mdash;'}</div>`;

    const domainCard = (domain) => `
      <article class="domain-card">
        <div class="domain-head">
          <div class="progress-circle" data-percent="${domain.progress_percentage}" data-status-color="${domain.status_color}">
            <span>${domain.days_remaining}d</span>
          </div>
          <div>
            <p class="name">${escapeHtml(domain.name)}</p>
            <p class="expiry">expires ${domain.expiration_date}</p>
          </div>
          <span class="badge" style="background: ${domain.status_color}">${domain.status}</span>
          <div class="domain-actions">
            <button class="btn-quiet" data-action="toggle" data-id="${domain.id}">Show details</button>
            <button class="btn-quiet" data-action="edit" data-id="${domain.id}">Edit</button>
            <button class="btn-primary" data-action="renew" data-id="${domain.id}">Renew</button>
            <button class="btn-danger" data-action="remove" data-id="${domain.id}">Delete</button>
          </div>
        </div>
        <div class="domain-details" id="details-${domain.id}" hidden>
          ${detailRow('Registrar', domain.registrar)}
          ${detailRow('Registered on', domain.registration_date)}
          ${detailRow('Renewal period', domain.renewal_period)}
          ${detailRow('Renewal price', domain.renewal_price ? `${domain.renewal_price} ${domain.currency}` : '')}
          ${detailRow('Renewal URL', domain.renewal_url)}
          ${detailRow('Remaining', `${domain.progress_percentage}% of the registration span`)}
        </div>
      </article>
    `;

    const renderDomains = (domains) => {
      domainsEl.innerHTML = domains.length
        ? domains.map(domainCard).join('')
        : '<p class="hint">No domains tracked yet.</p>';
      domainsEl.querySelectorAll('.progress-circle').forEach((circle) => {
        circle.style.setProperty('--percent', circle.dataset.percent);
        circle.style.setProperty('--status-color', circle.dataset.statusColor);
      });
    };

    const refresh = async () => {
      const domains = await api('/api/domains');
      renderDomains(domains);
      trackedEl.textContent = domains.length;
      expiringEl.textContent = domains.filter((d) => d.status !== 'success').length;
    };

    const setField = (name, value) => {
      const field = editForm.elements[name];
      if (field) {
        field.value = value ?? '';
      }
    };

    const actions = {
      toggle: async (id, button) => {
        const details = document.getElementById(`details-${id}`);
        const wasHidden = details.hasAttribute('hidden');
        details.toggleAttribute('hidden');
        button.textContent = wasHidden ? 'Hide details' : 'Show details';
      },
      edit: async (id) => {
        const domain = await api(`/api/domains/${id}`);
        for (const name of [
          'id', 'name', 'registrar', 'registration_date', 'expiration_date',
          'renewal_period', 'renewal_price', 'currency', 'renewal_url',
          'warning_threshold', 'danger_threshold'
        ]) {
          setField(name, domain[name]);
        }
        editDialog.showModal();
      },
      renew: async (id) => {
        const domain = await api(`/api/domains/${id}`);
        const preview = await postJson('/api/project', {
          expiration_date: domain.expiration_date,
          renewal_period: domain.renewal_period
        });
        const ok = confirm(
          `Renew ${domain.name} for ${preview.years_added} year(s)? ` +
          `New expiration: ${preview.projected_expiration}.`
        );
        if (!ok) {
          return;
        }
        await postJson(`/api/domains/${id}/renew`);
        await refresh();
        setStatus('Renewed', 'ok');
      },
      remove: async (id) => {
        if (!confirm('Delete this domain? This cannot be undone.')) {
          return;
        }
        await api(`/api/domains/${id}/delete`, { method: 'POST' });
        await refresh();
        setStatus('Deleted', 'ok');
      }
    };

    domainsEl.addEventListener('click', (event) => {
      const button = event.target.closest('button[data-action]');
      if (!button) {
        return;
      }
      actions[button.dataset.action](button.dataset.id, button)
        .catch((err) => setStatus(err.message, 'error'));
    });

    wireForm(addForm, (values) =>
      postJson('/api/domains', values).then(() => addForm.reset())
    );

    wireForm(editForm, (values) =>
      postJson(`/api/domains/${values.id}`, values).then(() => editDialog.close())
    );

    document.getElementById('edit-cancel').addEventListener('click', () => editDialog.close());

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
