use serde::Serialize;

/// Public routes of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    Products,
    Solutions,
    About,
    Contact,
    Auth,
    Quote,
    NotFound,
}

impl Page {
    pub const ROUTED: [Page; 7] = [
        Page::Home,
        Page::Products,
        Page::Solutions,
        Page::About,
        Page::Contact,
        Page::Auth,
        Page::Quote,
    ];

    pub fn from_path(path: &str) -> Page {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Page::ROUTED
            .into_iter()
            .find(|p| p.path() == path)
            .unwrap_or(Page::NotFound)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Products => "/produits",
            Page::Solutions => "/solutions",
            Page::About => "/a-propos",
            Page::Contact => "/contact",
            Page::Auth => "/auth",
            Page::Quote => "/devis",
            Page::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "AKAA-GROUPE | Emballages carton et papier",
            Page::Products => "Nos Produits | AKAA-GROUPE",
            Page::Solutions => "Nos Solutions | AKAA-GROUPE",
            Page::About => "À propos | AKAA-GROUPE",
            Page::Contact => "Contact | AKAA-GROUPE",
            Page::Auth => "Connexion | AKAA-GROUPE",
            Page::Quote => "Demander un devis | AKAA-GROUPE",
            Page::NotFound => "Page introuvable | AKAA-GROUPE",
        }
    }

    /// Document the client bundle mounts into.
    pub fn shell(&self) -> String {
        let name = match self {
            Page::Home => "home",
            Page::Products => "products",
            Page::Solutions => "solutions",
            Page::About => "about",
            Page::Contact => "contact",
            Page::Auth => "auth",
            Page::Quote => "quote",
            Page::NotFound => "not-found",
        };
        format!(
            "<!doctype html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{}</title>\n<script type=\"module\" src=\"/assets/app.js\"></script>\n</head>\n\
             <body>\n<div id=\"root\" data-page=\"{}\"></div>\n</body>\n</html>\n",
            escape_html(self.title()),
            name
        )
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
