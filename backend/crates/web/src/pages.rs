//! HTML pages
//!
//! Server-rendered markup for the signup form and the post-signup landing
//! page. Every user-supplied value goes through [`escape_html`].

/// Shown when the endpoint rejected the signup without a message
pub const SIGNUP_FAILED: &str = "Signup failed";

/// Shown when the endpoint could not be reached
pub const NETWORK_FAILURE: &str = "Something went wrong. Please try again later.";

/// Values echoed back into a re-rendered form. Passwords are never kept.
#[derive(Debug, Clone, Default)]
pub struct SignupView<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub error: Option<&'a str>,
}

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

// ── HTML Templates ────────────────────────────────────────────────────

fn base_style() -> &'static str {
    r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
        background: #0f172a; color: #e2e8f0;
        display: flex; justify-content: center; align-items: center;
        min-height: 100vh; padding: 20px;
    }
    .card {
        background: #1e293b; border-radius: 16px; padding: 32px;
        max-width: 420px; width: 100%; box-shadow: 0 4px 24px rgba(0,0,0,0.3);
        animation: fade-in 0.6s ease 100ms both;
    }
    @keyframes fade-in {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    h1 { font-size: 26px; text-align: center; }
    .subtitle { font-size: 14px; color: #94a3b8; text-align: center; margin: 8px 0 24px; }
    .form-group { margin-bottom: 16px; }
    .form-group label { display: block; font-size: 14px; font-weight: 500; margin-bottom: 6px; }
    .form-group input {
        width: 100%; padding: 12px 14px; border: 1.5px solid #334155;
        border-radius: 10px; font-size: 16px; outline: none;
        background: #0f172a; color: #e2e8f0; transition: border-color 0.2s;
    }
    .form-group input:focus { border-color: #6366f1; }
    .btn {
        width: 100%; padding: 14px; border: none; border-radius: 10px;
        font-size: 16px; font-weight: 600; cursor: pointer;
        background: #6366f1; color: #fff; transition: background 0.2s;
    }
    .btn:hover { background: #4f46e5; }
    .error { color: #f87171; font-size: 13px; margin-bottom: 16px; }
    .link { text-align: center; margin-top: 16px; font-size: 14px; color: #94a3b8; }
    .link a { color: #818cf8; text-decoration: none; }
    .link a:hover { text-decoration: underline; }
    "#
}

/// `GET /signup`, and every re-render after a failed submission
pub fn render_signup_page(view: &SignupView<'_>) -> String {
    let error_html = view
        .error
        .map(|e| format!(r#"<p class="error" role="alert">{}</p>"#, escape_html(e)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head>
<meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>Sign Up</title>
<style>{style}</style>
</head><body>
<main class="card">
  <h1>Create Your Account</h1>
  <p class="subtitle">Join a clean, fast chat platform. Built for real conversations, no distractions.</p>
  <form method="POST" action="/signup">
    <div class="form-group">
      <label for="username">Username</label>
      <input id="username" type="text" name="username" required autocomplete="username" value="{username}">
    </div>
    <div class="form-group">
      <label for="email">Email (optional)</label>
      <input id="email" type="email" name="email" autocomplete="email" value="{email}">
    </div>
    <div class="form-group">
      <label for="password">Password</label>
      <input id="password" type="password" name="password" required autocomplete="new-password">
    </div>
    <div class="form-group">
      <label for="confirm_password">Confirm Password</label>
      <input id="confirm_password" type="password" name="confirm_password" required autocomplete="new-password">
    </div>
    {error_html}
    <button type="submit" class="btn">Sign Up</button>
  </form>
  <p class="link">Already have an account? <a href="/login">Log in</a></p>
</main>
</body></html>"#,
        style = base_style(),
        username = escape_html(view.username),
        email = escape_html(view.email),
    )
}

/// `GET /setup-profile`, where a successful signup lands
pub fn render_setup_profile_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head>
<meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>Set Up Your Profile</title>
<style>{style}</style>
</head><body>
<main class="card">
  <h1>Welcome aboard</h1>
  <p class="subtitle">Your account is ready. Profile setup comes next.</p>
</main>
</body></html>"#,
        style = base_style(),
    )
}
