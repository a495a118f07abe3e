//! Home page renderer
//!
//! Renders the `HomePage` view model to a complete HTML document, section
//! by section: hero, recent-posts grid, greeting, profile header, work,
//! bio timeline, interests, on-the-web, newsletter. Markup is semantic with
//! stable class names; styling is left to whoever serves a stylesheet.
//!
//! Every interpolated value goes through `escape`. Grid card descriptions
//! are truncated; the hero description is not.

use crate::app::HomePage;
use crate::domain::entities::{Post, Profile};

/// Max length of a grid card description before truncation
const CARD_DESCRIPTION_LEN: usize = 160;

/// Render the home page to an HTML document
pub fn render_home(page: &HomePage) -> String {
    let mut buf = String::new();

    buf.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    buf.push_str(&format!("<title>{}</title>\n", escape(&page.profile.name)));
    buf.push_str("</head>\n<body>\n<main>\n");

    // Empty feed: no hero, no grid. Both sections are simply absent.
    if let Some(featured) = &page.featured {
        buf.push_str(&render_hero(featured));
    }
    if !page.remaining.is_empty() {
        buf.push_str(&render_recent_grid(&page.remaining));
    }

    buf.push_str(&render_profile(&page.profile));

    buf.push_str("</main>\n</body>\n</html>\n");
    buf
}

fn render_hero(post: &Post) -> String {
    let mut buf = String::new();

    buf.push_str("<section class=\"hero\">\n");
    buf.push_str(&format!(
        "  <img class=\"hero-image\" src=\"{}\" alt=\"{}\">\n",
        escape(&post.image),
        escape(&post.title)
    ));
    buf.push_str("  <div class=\"hero-overlay\">\n");
    buf.push_str(&format!(
        "    <span class=\"badge\">{}</span>\n",
        escape(&post.category)
    ));
    buf.push_str(&format!(
        "    <time datetime=\"{}\">{}</time>\n",
        post.date,
        post.long_date()
    ));
    buf.push_str(&format!("    <h2>{}</h2>\n", escape(&post.title)));
    buf.push_str(&format!("    <p>{}</p>\n", escape(&post.description)));
    buf.push_str(&format!(
        "    <a class=\"read-now\" href=\"{}\">Read Now</a>\n",
        escape(&post.url)
    ));
    buf.push_str("  </div>\n</section>\n");

    buf
}

fn render_recent_grid(posts: &[Post]) -> String {
    let mut buf = String::new();

    buf.push_str("<section class=\"recent-posts\">\n");
    buf.push_str("  <h3>Recent Posts</h3>\n");
    buf.push_str("  <div class=\"post-grid\">\n");
    for post in posts {
        buf.push_str(&render_card(post));
    }
    buf.push_str("  </div>\n</section>\n");

    buf
}

fn render_card(post: &Post) -> String {
    let mut buf = String::new();

    buf.push_str("    <article class=\"post-card\">\n");
    buf.push_str(&format!(
        "      <a href=\"{}\">\n",
        escape(&post.url)
    ));
    buf.push_str(&format!(
        "        <img src=\"{}\" alt=\"{}\">\n",
        escape(&post.image),
        escape(&post.title)
    ));
    buf.push_str(&format!(
        "        <span class=\"badge\">{}</span>\n",
        escape(&post.category)
    ));
    buf.push_str(&format!(
        "        <time datetime=\"{}\">{}</time>\n",
        post.date,
        post.short_date()
    ));
    buf.push_str(&format!("        <h4>{}</h4>\n", escape(&post.title)));
    buf.push_str(&format!(
        "        <p>{}</p>\n",
        escape(&truncate(&post.description, CARD_DESCRIPTION_LEN))
    ));
    if !post.tags.is_empty() {
        buf.push_str("        <div class=\"tags\">\n");
        for tag in &post.tags {
            buf.push_str(&format!(
                "          <span class=\"tag\">{}</span>\n",
                escape(tag)
            ));
        }
        buf.push_str("        </div>\n");
    }
    buf.push_str("      </a>\n    </article>\n");

    buf
}

fn render_profile(profile: &Profile) -> String {
    let mut buf = String::new();

    buf.push_str(&format!(
        "<div class=\"greeting\">{}</div>\n",
        escape(&profile.greeting)
    ));

    buf.push_str("<header class=\"profile\">\n");
    buf.push_str(&format!("  <h1>{}</h1>\n", escape(&profile.name)));
    buf.push_str(&format!(
        "  <p class=\"tagline\">{}</p>\n",
        escape(&profile.tagline)
    ));
    buf.push_str(&format!(
        "  <img class=\"avatar\" src=\"{}\" alt=\"{}\">\n",
        escape(&profile.avatar),
        escape(&profile.name)
    ));
    buf.push_str("</header>\n");

    buf.push_str("<section class=\"work\">\n  <h3>Work</h3>\n");
    buf.push_str(&format!("  <p>{}</p>\n", escape(&profile.work)));
    buf.push_str(&format!(
        "  <a class=\"portfolio\" href=\"{}\">My portfolio</a>\n",
        escape(&profile.portfolio_url)
    ));
    buf.push_str("</section>\n");

    if !profile.bio.is_empty() {
        buf.push_str("<section class=\"bio\">\n  <h3>Bio</h3>\n");
        for entry in &profile.bio {
            buf.push_str(&format!(
                "  <div class=\"bio-entry\"><span class=\"bio-year\">{}</span> {}</div>\n",
                escape(&entry.year),
                escape(&entry.entry)
            ));
        }
        buf.push_str("</section>\n");
    }

    buf.push_str("<section class=\"interests\">\n  <h3>I \u{2665}</h3>\n");
    buf.push_str(&format!("  <p>{}</p>\n", escape(&profile.interests)));
    buf.push_str("</section>\n");

    buf.push_str("<section class=\"web\">\n  <h3>On the web</h3>\n");
    if !profile.social.is_empty() {
        buf.push_str("  <ul class=\"social\">\n");
        for link in &profile.social {
            buf.push_str(&format!(
                "    <li class=\"social-{}\"><a href=\"{}\">{}</a></li>\n",
                link.platform,
                escape(&link.url),
                escape(&link.handle)
            ));
        }
        buf.push_str("  </ul>\n");
    }
    if !profile.links.is_empty() {
        buf.push_str("  <div class=\"link-grid\">\n");
        for link in &profile.links {
            buf.push_str(&format!(
                "    <a class=\"link-item\" href=\"{}\">\n",
                escape(&link.url)
            ));
            buf.push_str(&format!(
                "      <img src=\"{}\" alt=\"{}\">\n",
                escape(&link.thumbnail),
                escape(&link.title)
            ));
            buf.push_str(&format!(
                "      <span class=\"link-title\">{}</span>\n",
                escape(&link.title)
            ));
            buf.push_str(&format!(
                "      <span class=\"link-description\">{}</span>\n",
                escape(&link.description)
            ));
            buf.push_str("    </a>\n");
        }
        buf.push_str("  </div>\n");
    }
    buf.push_str("</section>\n");

    if let Some(newsletter) = &profile.newsletter {
        buf.push_str("<section class=\"newsletter\">\n  <h3>Newsletter</h3>\n");
        buf.push_str(&format!("  <p>{}</p>\n", escape(&newsletter.blurb)));
        buf.push_str(&format!(
            "  <a class=\"signup\" href=\"{}\">Sign up my newsletter here</a>\n",
            escape(&newsletter.signup_url)
        ));
        buf.push_str("</section>\n");
    }

    buf
}

/// Escape text for HTML body and attribute contexts
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Truncate a string with ellipsis, on a char boundary
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut.trim_end())
    }
}
