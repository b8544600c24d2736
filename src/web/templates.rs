use chrono::{Datelike, Utc};

use crate::intake::{Availability, FeedbackTone};
use crate::web::models::{BloodDonorContactRow, BloodDonorRow, OrganDonorRow};

pub const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];
pub const ORGANS: [&str; 7] = [
    "Kidney", "Liver", "Heart", "Lungs", "Pancreas", "Intestine", "Cornea",
];

const BASE_STYLES: &str = r#"
        :root { color-scheme: light; }
        body { font-family: "Helvetica Neue", Arial, sans-serif; margin: 0; background: #fff7f7; color: #1f2937; min-height: 100vh; display: flex; flex-direction: column; }
        header { background: #ffffff; padding: 1.25rem clamp(1rem, 5vw, 3rem); border-bottom: 1px solid #fde2e2; display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 1rem; }
        header .brand { font-size: 1.5rem; font-weight: 700; color: #b91c1c; text-decoration: none; }
        nav { display: flex; flex-wrap: wrap; gap: 0.9rem; align-items: center; }
        nav a { color: #374151; text-decoration: none; font-weight: 600; }
        nav a:hover { color: #b91c1c; }
        nav .greeting { color: #6b7280; font-size: 0.95rem; }
        main { flex: 1; padding: clamp(1.5rem, 4vw, 3rem); max-width: 1000px; margin: 0 auto; width: 100%; box-sizing: border-box; }
        .panel { background: #ffffff; border-radius: 14px; border: 1px solid #fde2e2; padding: 1.75rem; box-shadow: 0 18px 40px rgba(185, 28, 28, 0.06); margin-bottom: 2rem; }
        .panel h2 { margin-top: 0; }
        label { display: block; margin-top: 1rem; font-weight: 600; }
        input, select, textarea { width: 100%; padding: 0.75rem; margin-top: 0.4rem; border-radius: 8px; border: 1px solid #e5e7eb; background: #fafafa; box-sizing: border-box; font-size: 1rem; }
        textarea { min-height: 7rem; }
        button, .button { display: inline-block; margin-top: 1.5rem; padding: 0.85rem 1.4rem; border: none; border-radius: 8px; background: #dc2626; color: #ffffff; font-weight: 600; cursor: pointer; text-decoration: none; }
        button:hover, .button:hover { background: #b91c1c; }
        .cards { display: grid; gap: 1.25rem; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
        .card { display: block; background: #ffffff; border: 1px solid #fde2e2; border-radius: 14px; padding: 1.5rem; text-decoration: none; color: inherit; }
        .card:hover { border-color: #fca5a5; }
        table { width: 100%; border-collapse: collapse; margin-top: 1rem; }
        th, td { padding: 0.65rem 0.9rem; border-bottom: 1px solid #f3f4f6; text-align: left; }
        th { background: #fef2f2; }
        .note { color: #6b7280; line-height: 1.6; }
        .status { font-weight: 700; }
        .status.available { color: #15803d; }
        .status.unavailable { color: #b45309; }
        .charts { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }
        .app-footer { margin-top: 3rem; padding: 1.5rem; text-align: center; font-size: 0.85rem; color: #9ca3af; }
"#;

fn render_page(title: &str, viewer: Option<&str>, body: &str, scripts: &str) -> String {
    let greeting = match viewer {
        Some(name) => format!(
            r#"<span class="greeting">Hello, <strong>{name}</strong></span><a href="/dashboard">Dashboard</a><a href="/logout">Logout</a>"#,
            name = escape_html(name),
        ),
        None => r#"<a href="/login">Login</a><a href="/signup">Sign up</a>"#.to_string(),
    };
    let footer = render_footer();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title} · LifeNest</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
{styles}
    </style>
</head>
<body>
    <header>
        <a class="brand" href="/">LifeNest</a>
        <nav>
            <a href="/donate">Donate</a>
            <a href="/donate/receive">Receive</a>
            <a href="/dashboardstats">Statistics</a>
            <a href="/feedback">Feedback</a>
            <a href="/about">About</a>
            <a href="/contact">Contact</a>
            {greeting}
        </nav>
    </header>
    <main>
{body}
    </main>
    {footer}
{scripts}
</body>
</html>"#,
        title = escape_html(title),
        styles = BASE_STYLES,
        greeting = greeting,
        body = body,
        footer = footer,
        scripts = scripts,
    )
}

pub fn render_footer() -> String {
    let current_year = Utc::now().year();
    format!(
        r#"<footer class="app-footer">© {year} LifeNest · Every drop counts</footer>"#,
        year = current_year
    )
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn options(values: &[&str]) -> String {
    values
        .iter()
        .map(|value| {
            format!(
                r#"<option value="{value}">{value}</option>"#,
                value = escape_html(value)
            )
        })
        .collect()
}

fn contact_fields() -> &'static str {
    r#"<label for="name">Full name</label>
            <input id="name" name="name" required>
            <label for="email">Email</label>
            <input id="email" type="email" name="email" required>
            <label for="phone">Phone</label>
            <input id="phone" type="tel" name="phone" required>
            <label for="address">Address</label>
            <input id="address" name="address" required>"#
}

pub fn render_home(viewer: Option<&str>) -> String {
    let body = r#"        <section class="panel">
            <h1>Give blood. Give life.</h1>
            <p class="note">LifeNest connects blood and organ donors with the people who need them. Register as a donor, request a donation, or browse who is available near you.</p>
        </section>
        <div class="cards">
            <a class="card" href="/donate/blood/form"><h2>Donate blood</h2><p class="note">Register as a blood donor in two minutes.</p></a>
            <a class="card" href="/donate/organ"><h2>Donate an organ</h2><p class="note">Pledge an organ and name your nearest hospital.</p></a>
            <a class="card" href="/donate/receive"><h2>Request blood</h2><p class="note">Check availability for your blood group.</p></a>
            <a class="card" href="/donate/organ/receive"><h2>Request an organ</h2><p class="note">Register your need with a nearby hospital.</p></a>
        </div>"#;
    render_page("Home", viewer, body, "")
}

pub fn render_signup_page() -> String {
    let body = r#"        <section class="panel">
            <h1>Create an account</h1>
            <form method="post" action="/signup">
                <label for="name">Name</label>
                <input id="name" name="name" required>
                <label for="email">Email</label>
                <input id="email" type="email" name="email" required>
                <label for="password">Password</label>
                <input id="password" type="password" name="password" required>
                <button type="submit">Sign up</button>
            </form>
            <p class="note">Already registered? <a href="/login">Log in</a>.</p>
        </section>"#;
    render_page("Sign up", None, body, "")
}

pub fn render_login_page() -> String {
    let body = r#"        <section class="panel">
            <h1>Log in</h1>
            <form method="post" action="/login">
                <label for="email">Email</label>
                <input id="email" type="email" name="email" required>
                <label for="password">Password</label>
                <input id="password" type="password" name="password" required>
                <button type="submit">Log in</button>
            </form>
            <p class="note">New to LifeNest? <a href="/signup">Create an account</a>.</p>
        </section>"#;
    render_page("Log in", None, body, "")
}

pub fn render_dashboard(name: &str) -> String {
    let body = format!(
        r#"        <section class="panel">
            <h1>Welcome back, {name}</h1>
            <p class="note">Pick up where you left off.</p>
        </section>
        <div class="cards">
            <a class="card" href="/donate/blood/form"><h2>Donate blood</h2></a>
            <a class="card" href="/donate/organ/form"><h2>Donate an organ</h2></a>
            <a class="card" href="/donate/receive"><h2>Request blood</h2></a>
            <a class="card" href="/donate/organ/receive"><h2>Request an organ</h2></a>
            <a class="card" href="/dashboardstats"><h2>Statistics</h2></a>
            <a class="card" href="/queriesblood"><h2>Ask a question</h2></a>
        </div>"#,
        name = escape_html(name),
    );
    render_page("Dashboard", Some(name), &body, "")
}

pub fn render_dashboard_stats(viewer: Option<&str>) -> String {
    let display_name = escape_html(viewer.unwrap_or("Guest"));
    let body = format!(
        r#"        <section class="panel">
            <h1>Donation statistics</h1>
            <p class="note">Hello {display_name}, here is how LifeNest donors are doing.</p>
        </section>
        <div class="charts">
            <section class="panel"><h2>Blood groups</h2><canvas id="bloodTypes"></canvas></section>
            <section class="panel"><h2>Organs pledged</h2><canvas id="organTypes"></canvas></section>
            <section class="panel"><h2>Donations per day</h2><canvas id="dailyStats"></canvas></section>
        </div>"#,
    );
    let scripts = r#"<script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
<script>
    (async () => {
        const types = await fetch('/api/types').then((r) => r.json());
        const stats = await fetch('/api/stats').then((r) => r.json());
        const bar = (id, rows) => new Chart(document.getElementById(id), {
            type: 'bar',
            data: { labels: rows.map((r) => r.type), datasets: [{ label: 'Donors', data: rows.map((r) => r.total) }] },
        });
        bar('bloodTypes', types.bloodTypes);
        bar('organTypes', types.organTypes);
        const days = [...new Set([...stats.bloodStats, ...stats.organStats].map((r) => r.donated_at))].sort();
        const series = (rows) => days.map((d) => (rows.find((r) => r.donated_at === d) || { count: 0 }).count);
        new Chart(document.getElementById('dailyStats'), {
            type: 'line',
            data: {
                labels: days,
                datasets: [
                    { label: 'Blood', data: series(stats.bloodStats) },
                    { label: 'Organ', data: series(stats.organStats) },
                ],
            },
        });
    })();
</script>"#;
    render_page("Statistics", viewer, &body, scripts)
}

pub fn render_donate_page(viewer: Option<&str>, donors: &[BloodDonorRow]) -> String {
    let rows = if donors.is_empty() {
        r#"<tr><td colspan="2">No donors registered yet.</td></tr>"#.to_string()
    } else {
        donors
            .iter()
            .map(|donor| {
                format!(
                    "<tr><td>{name}</td><td>{group}</td></tr>",
                    name = escape_html(&donor.name),
                    group = escape_html(donor.blood_group.as_deref().unwrap_or("Unknown")),
                )
            })
            .collect()
    };

    let body = format!(
        r#"        <section class="panel">
            <h1>Donate</h1>
            <p class="note">Read the <a href="/prerequisites">blood donation prerequisites</a> or the <a href="/organPrerequisites">organ donation prerequisites</a> first.</p>
            <a class="button" href="/donate/blood/form">Donate blood</a>
            <a class="button" href="/donate/organ">Donate an organ</a>
        </section>
        <section class="panel">
            <h2>Registered blood donors</h2>
            <table>
                <thead><tr><th>Name</th><th>Blood group</th></tr></thead>
                <tbody>{rows}</tbody>
            </table>
        </section>"#,
    );
    render_page("Donate", viewer, &body, "")
}

pub fn render_blood_form(viewer: Option<&str>) -> String {
    let body = format!(
        r#"        <section class="panel">
            <h1>Blood donor registration</h1>
            <form method="post" action="/donate/blood/form">
            {fields}
            <label for="dob">Date of birth</label>
            <input id="dob" type="date" name="dob" required>
            <label for="bloodGroup">Blood group</label>
            <select id="bloodGroup" name="bloodGroup" required>{groups}</select>
            <button type="submit">Register</button>
            </form>
        </section>"#,
        fields = contact_fields(),
        groups = options(&BLOOD_GROUPS),
    );
    render_page("Donate blood", viewer, &body, "")
}

pub fn render_donation_success(viewer: Option<&str>, name: &str, email: &str) -> String {
    let body = format!(
        r#"        <section class="panel">
            <h1>Thank you, {name}!</h1>
            <p class="note">Your blood donor registration is complete. A confirmation has been sent to <strong>{email}</strong>.</p>
            <a class="button" href="/">Back to home</a>
        </section>"#,
        name = escape_html(name),
        email = escape_html(email),
    );
    render_page("Donation registered", viewer, &body, "")
}

pub fn render_blood_receive_page(viewer: Option<&str>, donors: &[BloodDonorContactRow]) -> String {
    let rows = if donors.is_empty() {
        r#"<tr><td colspan="4">No donors registered yet.</td></tr>"#.to_string()
    } else {
        donors
            .iter()
            .map(|donor| {
                format!(
                    "<tr><td>{name}</td><td>{group}</td><td>{phone}</td><td>{address}</td></tr>",
                    name = escape_html(&donor.name),
                    group = escape_html(donor.blood_group.as_deref().unwrap_or("Unknown")),
                    phone = escape_html(&donor.phone),
                    address = escape_html(&donor.address),
                )
            })
            .collect()
    };

    let body = format!(
        r#"        <section class="panel">
            <h1>Request blood</h1>
            <form method="post" action="/donate/receive">
            {fields}
            <label for="bloodGroup">Blood group needed</label>
            <select id="bloodGroup" name="bloodGroup" required>{groups}</select>
            <button type="submit">Check availability</button>
            </form>
        </section>
        <section class="panel">
            <h2>Available donors</h2>
            <table>
                <thead><tr><th>Name</th><th>Blood group</th><th>Phone</th><th>Address</th></tr></thead>
                <tbody>{rows}</tbody>
            </table>
        </section>"#,
        fields = contact_fields(),
        groups = options(&BLOOD_GROUPS),
    );
    render_page("Request blood", viewer, &body, "")
}

pub fn render_receive_success(
    viewer: Option<&str>,
    name: &str,
    availability: Availability,
) -> String {
    let class = match availability {
        Availability::Available => "available",
        Availability::CurrentlyNotAvailable => "unavailable",
    };
    let body = format!(
        r#"        <section class="panel">
            <h1>Request received</h1>
            <p class="note">Thank you, {name}. We have emailed you the details of your request.</p>
            <p>Status: <span class="status {class}">{label}</span></p>
            <a class="button" href="/donate/receive">Back to donors</a>
        </section>"#,
        name = escape_html(name),
        label = availability.label(),
    );
    render_page("Request received", viewer, &body, "")
}

pub fn render_donate_organ(viewer: Option<&str>) -> String {
    let body = r#"        <section class="panel">
            <h1>Organ donation</h1>
            <p class="note">Organ donors must be at least 20 years old. Please review the <a href="/organPrerequisites">prerequisites</a> before registering.</p>
            <a class="button" href="/donate/organ/form">Pledge an organ</a>
            <a class="button" href="/donate/organ/receive">Request an organ</a>
        </section>"#;
    render_page("Organ donation", viewer, body, "")
}

pub fn render_organ_form(viewer: Option<&str>) -> String {
    let body = format!(
        r#"        <section class="panel">
            <h1>Organ donor registration</h1>
            <form method="post" action="/donate/organ/form">
            {fields}
            <label for="dob">Date of birth</label>
            <input id="dob" type="date" name="dob" required>
            <label for="organ">Organ</label>
            <select id="organ" name="organ" required>{organs}</select>
            <label for="nearbyHospital">Nearby hospital</label>
            <input id="nearbyHospital" name="nearbyHospital" required>
            <button type="submit">Pledge</button>
            </form>
        </section>"#,
        fields = contact_fields(),
        organs = options(&ORGANS),
    );
    render_page("Donate an organ", viewer, &body, "")
}

pub fn render_organ_success(viewer: Option<&str>, name: &str, email: &str) -> String {
    let body = format!(
        r#"        <section class="panel">
            <h1>Thank you, {name}!</h1>
            <p class="note">Your organ pledge has been recorded. A confirmation has been sent to <strong>{email}</strong>.</p>
            <a class="button" href="/">Back to home</a>
        </section>"#,
        name = escape_html(name),
        email = escape_html(email),
    );
    render_page("Pledge recorded", viewer, &body, "")
}

pub fn render_organ_receive_page(viewer: Option<&str>, donors: &[OrganDonorRow]) -> String {
    let rows = if donors.is_empty() {
        r#"<tr><td colspan="4">No organ donors registered yet.</td></tr>"#.to_string()
    } else {
        donors
            .iter()
            .map(|donor| {
                format!(
                    "<tr><td>{name}</td><td>{organ}</td><td>{phone}</td><td>{hospital}</td></tr>",
                    name = escape_html(&donor.name),
                    organ = escape_html(donor.organ.as_deref().unwrap_or("Unknown")),
                    phone = escape_html(&donor.phone),
                    hospital = escape_html(&donor.nearby_hospital),
                )
            })
            .collect()
    };

    let body = format!(
        r#"        <section class="panel">
            <h1>Request an organ</h1>
            <form method="post" action="/donate/organ/receive">
            {fields}
            <label for="organNeeded">Organ needed</label>
            <select id="organNeeded" name="organNeeded" required>{organs}</select>
            <label for="nearbyHospital">Nearby hospital</label>
            <input id="nearbyHospital" name="nearbyHospital" list="hospitalOptions" required>
            <datalist id="hospitalOptions"></datalist>
            <button type="submit">Register request</button>
            </form>
        </section>
        <section class="panel">
            <h2>Organ donors</h2>
            <table>
                <thead><tr><th>Name</th><th>Organ</th><th>Phone</th><th>Hospital</th></tr></thead>
                <tbody>{rows}</tbody>
            </table>
        </section>"#,
        fields = contact_fields(),
        organs = options(&ORGANS),
    );
    let scripts = r#"<script>
    const organSelect = document.getElementById('organNeeded');
    const hospitalList = document.getElementById('hospitalOptions');
    async function loadHospitals() {
        const response = await fetch('/donate/organ/hospitals?organ=' + encodeURIComponent(organSelect.value));
        if (!response.ok) { return; }
        const rows = await response.json();
        hospitalList.replaceChildren(...rows.map((row) => {
            const option = document.createElement('option');
            option.value = row.hospital_name;
            return option;
        }));
    }
    organSelect.addEventListener('change', loadHospitals);
    loadHospitals();
</script>"#;
    render_page("Request an organ", viewer, &body, scripts)
}

pub fn render_organ_receive_success(viewer: Option<&str>, name: &str, email: &str) -> String {
    let body = format!(
        r#"        <section class="panel">
            <h1>Request registered</h1>
            <p class="note">Thank you, {name}. We will reach out at <strong>{email}</strong> when a suitable donor is available.</p>
            <a class="button" href="/donate/organ/receive">Back to organ donors</a>
        </section>"#,
        name = escape_html(name),
        email = escape_html(email),
    );
    render_page("Request registered", viewer, &body, "")
}

pub fn render_prerequisites(viewer: Option<&str>) -> String {
    let body = r#"        <section class="panel">
            <h1>Before you donate blood</h1>
            <ul class="note">
                <li>You should be between 18 and 65 years old and weigh at least 50 kg.</li>
                <li>Eat a light meal and drink plenty of water beforehand.</li>
                <li>Wait at least three months between whole-blood donations.</li>
                <li>Do not donate if you are unwell, on antibiotics, or recently tattooed.</li>
            </ul>
            <a class="button" href="/donate/blood/form">Register as a donor</a>
        </section>"#;
    render_page("Blood donation prerequisites", viewer, body, "")
}

pub fn render_organ_prerequisites(viewer: Option<&str>) -> String {
    let body = r#"        <section class="panel">
            <h1>Before you pledge an organ</h1>
            <ul class="note">
                <li>Organ donors registering with LifeNest must be at least 20 years old.</li>
                <li>Discuss your decision with your family and your doctor.</li>
                <li>Choose a hospital near you that can coordinate the donation.</li>
            </ul>
            <a class="button" href="/donate/organ/form">Pledge an organ</a>
        </section>"#;
    render_page("Organ donation prerequisites", viewer, body, "")
}

pub fn render_queries_page(viewer: Option<&str>) -> String {
    let body = r#"        <section class="panel">
            <h1>Ask us anything</h1>
            <form method="post" action="/queriesblood">
                <label for="name">Name</label>
                <input id="name" name="name" required>
                <label for="email">Email</label>
                <input id="email" type="email" name="email" required>
                <label for="query">Your question</label>
                <textarea id="query" name="query" required></textarea>
                <button type="submit">Send</button>
            </form>
        </section>"#;
    render_page("Queries", viewer, body, "")
}

pub fn render_queries_success(viewer: Option<&str>, name: &str, email: &str) -> String {
    let body = format!(
        r#"        <section class="panel">
            <h1>Query received</h1>
            <p class="note">Thank you, {name}. We will reply to <strong>{email}</strong> soon.</p>
            <a class="button" href="/">Back to home</a>
        </section>"#,
        name = escape_html(name),
        email = escape_html(email),
    );
    render_page("Query received", viewer, &body, "")
}

pub fn render_feedback_page(viewer: Option<&str>) -> String {
    let body = r#"        <section class="panel">
            <h1>Share your feedback</h1>
            <form method="post" action="/feedback">
                <label for="name">Name</label>
                <input id="name" name="name" required>
                <label for="email">Email (optional)</label>
                <input id="email" type="email" name="email">
                <label for="category">Category</label>
                <select id="category" name="category" required>
                    <option value="General">General</option>
                    <option value="Website">Website</option>
                    <option value="Donation process">Donation process</option>
                    <option value="Support">Support</option>
                </select>
                <label for="rating">Rating (1-5)</label>
                <input id="rating" type="number" name="rating" min="1" max="5" required>
                <label for="message">Message</label>
                <textarea id="message" name="message" required></textarea>
                <button type="submit">Submit</button>
            </form>
        </section>"#;
    render_page("Feedback", viewer, body, "")
}

pub fn render_feedback_success(
    viewer: Option<&str>,
    name: Option<&str>,
    tone: FeedbackTone,
) -> String {
    let name = escape_html(name.unwrap_or("friend"));
    let body = if tone.is_low() {
        format!(
            r#"        <section class="panel feedback-low">
            <h1>We're sorry, {name}</h1>
            <p class="note">Thank you for telling us where we fell short. Our team reads every low rating and will follow up to make things right.</p>
            <a class="button" href="/contact">Contact support</a>
        </section>"#
        )
    } else {
        format!(
            r#"        <section class="panel feedback-standard">
            <h1>Thank you, {name}!</h1>
            <p class="note">Your feedback helps LifeNest save more lives.</p>
            <a class="button" href="/">Back to home</a>
        </section>"#
        )
    };
    render_page("Feedback received", viewer, &body, "")
}

pub fn render_about(viewer: Option<&str>) -> String {
    let body = r#"        <section class="panel">
            <h1>About LifeNest</h1>
            <p class="note">LifeNest is a community platform that makes blood and organ donation simple. Donors register once, people in need can check availability instantly, and every registration is confirmed by email.</p>
        </section>"#;
    render_page("About", viewer, body, "")
}

pub fn render_contact(viewer: Option<&str>) -> String {
    let body = r#"        <section class="panel">
            <h1>Contact us</h1>
            <p class="note">Have a question about donating or receiving? Send us a <a href="/queriesblood">query</a> or share <a href="/feedback">feedback</a> and our team will respond by email.</p>
        </section>"#;
    render_page("Contact", viewer, body, "")
}
