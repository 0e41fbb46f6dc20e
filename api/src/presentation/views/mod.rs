// Server-rendered pages. Every interpolated value goes through `escape_html`.

use htmlescape::encode_minimal as escape_html;

use crate::application::access::Principal;
use crate::application::dto::dashboard::DashboardDto;
use crate::domain::transit::fare::{BASE_FARE, FareQuote, PER_KM_RATE};
use crate::domain::transit::samples::{Arrival, BusPosition, RouteSchedule};
use crate::presentation::http::flash::FlashMessage;

pub struct PageChrome<'a> {
    pub principal: Option<&'a Principal>,
    pub flash: Option<&'a FlashMessage>,
}

fn nav(principal: Option<&Principal>) -> String {
    let mut links = String::from(
        "<a href=\"/\">Home</a> <a href=\"/schedule\">Schedule</a> <a href=\"/track\">Track</a> \
         <a href=\"/fare\">Fare</a> <a href=\"/contact\">Contact</a>",
    );
    match principal {
        Some(p) => {
            if p.is_admin {
                links.push_str(" <a href=\"/dashboard\">Dashboard</a>");
            }
            links.push_str(&format!(
                " <span class=\"user\">Hi, {}</span> <a href=\"/logout\">Log out</a>",
                escape_html(&p.name)
            ));
        }
        None => links.push_str(" <a href=\"/login\">Log in</a> <a href=\"/register\">Register</a>"),
    }
    links
}

const LEAFLET_ASSETS: &str = "<link rel=\"stylesheet\" href=\"https://unpkg.com/leaflet@1.9.4/dist/leaflet.css\" />\n<script src=\"https://unpkg.com/leaflet@1.9.4/dist/leaflet.js\"></script>\n";

pub fn layout(title: &str, chrome: &PageChrome<'_>, content: &str) -> String {
    layout_with_head(title, chrome, content, "")
}

/// `head` is trusted markup appended inside `<head>`.
fn layout_with_head(title: &str, chrome: &PageChrome<'_>, content: &str, head: &str) -> String {
    let flash = chrome
        .flash
        .map(|f| {
            format!(
                "<div class=\"flash flash-{}\">{}</div>\n",
                f.level.as_str(),
                escape_html(&f.text)
            )
        })
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n<title>{title} | SmartBusFlow</title>\n<link rel=\"stylesheet\" href=\"/static/css/style.css\" />\n{head}</head>\n<body>\n<nav>{nav}</nav>\n{flash}<main>\n{content}\n</main>\n<script src=\"/static/js/main.js\"></script>\n</body>\n</html>\n",
        title = escape_html(title),
        nav = nav(chrome.principal),
        flash = flash,
        content = content,
        head = head,
    )
}

fn subscribe_form() -> &'static str {
    "<form method=\"post\" action=\"/subscribe\" class=\"subscribe\">\n<input type=\"email\" name=\"email\" placeholder=\"you@example.com\" />\n<button type=\"submit\">Subscribe</button>\n</form>"
}

pub fn home(chrome: &PageChrome<'_>, arrivals: &[Arrival]) -> String {
    let rows: String = arrivals
        .iter()
        .map(|a| {
            format!(
                "<li class=\"reveal\"><strong>{}</strong> to {} at {} in {} min</li>\n",
                escape_html(a.route),
                escape_html(a.destination),
                escape_html(a.stop),
                a.eta_minutes
            )
        })
        .collect();
    let content = format!(
        "<h1>SmartBusFlow</h1>\n<p>Smarter commutes, fewer waits.</p>\n<h2>Upcoming arrivals</h2>\n<ul class=\"arrivals\">\n{rows}</ul>\n<h2>Newsletter</h2>\n{form}",
        rows = rows,
        form = subscribe_form(),
    );
    layout("Home", chrome, &content)
}

pub fn schedule(chrome: &PageChrome<'_>, routes: &[RouteSchedule]) -> String {
    let rows: String = routes
        .iter()
        .map(|r| {
            let stops = r
                .stops
                .iter()
                .map(|s| escape_html(s))
                .collect::<Vec<_>>()
                .join(" &rarr; ");
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>every {} min</td></tr>\n",
                escape_html(r.route),
                escape_html(r.name),
                stops,
                escape_html(r.first_departure),
                escape_html(r.last_departure),
                r.frequency_minutes
            )
        })
        .collect();
    let content = format!(
        "<h1>Schedule</h1>\n<table class=\"schedule\">\n<tr><th>Route</th><th>Name</th><th>Stops</th><th>First</th><th>Last</th><th>Frequency</th></tr>\n{rows}</table>",
        rows = rows
    );
    layout("Schedule", chrome, &content)
}

pub fn track(chrome: &PageChrome<'_>, positions: &[BusPosition]) -> String {
    let rows: String = positions
        .iter()
        .map(|b| {
            format!(
                "<li data-lat=\"{lat}\" data-lng=\"{lng}\">{id} (route {route}): {status}</li>\n",
                lat = b.lat,
                lng = b.lng,
                id = escape_html(b.bus_id),
                route = escape_html(b.route),
                status = escape_html(b.status),
            )
        })
        .collect();
    let content = format!(
        "<h1>Live tracking (demo)</h1>\n<div id=\"map\"></div>\n<ul class=\"bus-list\">\n{rows}</ul>",
        rows = rows
    );
    layout_with_head("Track", chrome, &content, LEAFLET_ASSETS)
}

pub fn fare(chrome: &PageChrome<'_>, distance: Option<&str>, quote: Option<FareQuote>) -> String {
    let result = match quote {
        Some(FareQuote::Amount(amount)) => {
            format!("<p class=\"fare-result\">Estimated fare: &#8377;{amount:.2}</p>")
        }
        Some(FareQuote::InvalidInput) => {
            "<p class=\"fare-error\">Invalid input: please enter the distance in kilometres as a number.</p>".to_string()
        }
        None => String::new(),
    };
    let content = format!(
        "<h1>Fare calculator</h1>\n<p>Base fare &#8377;{base:.0} plus &#8377;{rate:.0} per km.</p>\n<form method=\"post\" action=\"/fare\">\n<input type=\"text\" name=\"distance\" value=\"{value}\" placeholder=\"Distance (km)\" />\n<button type=\"submit\">Calculate</button>\n</form>\n{result}",
        base = BASE_FARE,
        rate = PER_KM_RATE,
        value = escape_html(distance.unwrap_or("")),
        result = result,
    );
    layout("Fare", chrome, &content)
}

pub fn contact(chrome: &PageChrome<'_>) -> String {
    let content = "<h1>Contact us</h1>\n<form method=\"post\" action=\"/contact\">\n<input type=\"text\" name=\"name\" placeholder=\"Your name\" />\n<input type=\"email\" name=\"email\" placeholder=\"you@example.com\" />\n<textarea name=\"message\" placeholder=\"How can we help?\"></textarea>\n<button type=\"submit\">Send</button>\n</form>";
    layout("Contact", chrome, content)
}

pub fn register(chrome: &PageChrome<'_>) -> String {
    let content = "<h1>Create an account</h1>\n<form method=\"post\" action=\"/register\">\n<input type=\"text\" name=\"name\" placeholder=\"Name\" required />\n<input type=\"email\" name=\"email\" placeholder=\"Email\" required />\n<input type=\"password\" name=\"password\" placeholder=\"Password\" required />\n<button type=\"submit\">Register</button>\n</form>";
    layout("Register", chrome, content)
}

pub fn login(chrome: &PageChrome<'_>) -> String {
    let content = "<h1>Log in</h1>\n<form method=\"post\" action=\"/login\">\n<input type=\"email\" name=\"email\" placeholder=\"Email\" required />\n<input type=\"password\" name=\"password\" placeholder=\"Password\" required />\n<button type=\"submit\">Log in</button>\n</form>";
    layout("Log in", chrome, content)
}

pub fn forbidden(chrome: &PageChrome<'_>) -> String {
    layout(
        "Forbidden",
        chrome,
        "<h1>403 Forbidden</h1>\n<p>The dashboard is only available to administrators.</p>",
    )
}

fn timestamp(ts: &chrono::DateTime<chrono::Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

pub fn dashboard(chrome: &PageChrome<'_>, data: &DashboardDto) -> String {
    let users: String = data
        .users
        .iter()
        .map(|u| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                u.id,
                escape_html(&u.name),
                escape_html(&u.email),
                if u.is_admin { "yes" } else { "no" },
                timestamp(&u.created_at)
            )
        })
        .collect();
    let subscribers: String = data
        .subscribers
        .iter()
        .map(|s| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                s.id,
                escape_html(&s.email),
                timestamp(&s.created_at)
            )
        })
        .collect();
    let messages: String = data
        .messages
        .iter()
        .map(|m| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                m.id,
                escape_html(&m.name),
                escape_html(&m.email),
                escape_html(&m.message),
                timestamp(&m.created_at)
            )
        })
        .collect();
    let content = format!(
        "<h1>Admin dashboard</h1>\n<h2>Users ({nu})</h2>\n<table class=\"users\">\n<tr><th>ID</th><th>Name</th><th>Email</th><th>Admin</th><th>Joined</th></tr>\n{users}</table>\n<h2>Subscribers ({ns})</h2>\n<table class=\"subscribers\">\n<tr><th>ID</th><th>Email</th><th>Since</th></tr>\n{subscribers}</table>\n<h2>Messages ({nm})</h2>\n<table class=\"messages\">\n<tr><th>ID</th><th>Name</th><th>Email</th><th>Message</th><th>Received</th></tr>\n{messages}</table>",
        nu = data.users.len(),
        ns = data.subscribers.len(),
        nm = data.messages.len(),
        users = users,
        subscribers = subscribers,
        messages = messages,
    );
    layout("Dashboard", chrome, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::http::flash::FlashLevel;

    #[test]
    fn layout_escapes_flash_and_name() {
        let principal = Principal {
            user_id: 1,
            name: "<b>Eve</b>".into(),
            is_admin: false,
        };
        let flash = FlashMessage::new(FlashLevel::Info, "<script>x</script>");
        let html = layout(
            "Home",
            &PageChrome {
                principal: Some(&principal),
                flash: Some(&flash),
            },
            "",
        );
        assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!html.contains("/dashboard"));
        assert!(html.contains("/logout"));
    }

    #[test]
    fn fare_page_shows_quote_or_error() {
        let chrome = PageChrome {
            principal: None,
            flash: None,
        };
        let ok = fare(&chrome, Some("10"), Some(FareQuote::Amount(80.0)));
        assert!(ok.contains("80.00"));
        let bad = fare(&chrome, Some("abc"), Some(FareQuote::InvalidInput));
        assert!(bad.contains("Invalid input"));
        assert!(bad.contains("value=\"abc\""));
    }

    #[test]
    fn only_track_page_loads_leaflet() {
        let chrome = PageChrome {
            principal: None,
            flash: None,
        };
        let track_html = track(&chrome, crate::domain::transit::samples::bus_positions());
        assert!(track_html.contains("leaflet.js"));
        assert!(track_html.contains("<div id=\"map\">"));
        let home_html = home(&chrome, crate::domain::transit::samples::upcoming_arrivals());
        assert!(!home_html.contains("leaflet"));
        assert!(home_html.contains("/static/js/main.js"));
    }
}
