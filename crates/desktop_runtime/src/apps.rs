//! App registry: maps [`AppId`] to mountable modules and identifiers.

use desktop_app_contract::{AppModule, AppMountContext, ApplicationId};
use leptos::*;

use crate::model::AppId;

/// Stable package identifier for an app, used for aria labels and DOM ids.
pub fn application_id(app_id: AppId) -> ApplicationId {
    let raw = match app_id {
        AppId::About => "studio.about",
        AppId::Projects => "studio.projects",
        AppId::Notepad => "system.notepad",
        AppId::Calculator => "system.calculator",
        AppId::Clock => "system.clock",
        AppId::Paint => "system.paint",
        AppId::Minesweeper => "system.minesweeper",
        AppId::Solitaire => "system.solitaire",
    };
    ApplicationId::trusted(raw)
}

/// Module used to mount the app's view into a window body.
pub fn app_module(app_id: AppId) -> AppModule {
    match app_id {
        AppId::About => AppModule::new(mount_about),
        AppId::Projects => AppModule::new(mount_projects),
        AppId::Notepad => AppModule::new(desktop_app_notepad::mount),
        AppId::Calculator => AppModule::new(desktop_app_calculator::mount),
        AppId::Clock => AppModule::new(desktop_app_clock::mount),
        AppId::Paint => AppModule::new(desktop_app_paint::mount),
        AppId::Minesweeper => AppModule::new(desktop_app_minesweeper::mount),
        AppId::Solitaire => AppModule::new(desktop_app_solitaire::mount),
    }
}

const STUDIO_NAME: &str = "SUPERSELF STUDIO";
const STUDIO_EMAIL: &str = "flavio@superself.online";

const STUDIO_LINKS: [(&str, &str); 3] = [
    ("github", "https://github.com/9000fm"),
    ("instagram", "https://instagram.com/sqr.fm"),
    ("linkedin", "https://linkedin.com/in/flavio-manyari"),
];

const STUDIO_SERVICES: [&str; 5] = [
    "WEB DESIGN & CODE",
    "GRAPHIC DESIGN",
    "VISUAL IDENTITY",
    "BRANDING",
    "MUSIC",
];

const STUDIO_PROJECTS: [(&str, &str); 4] = [
    ("superself.online", "https://superself.online"),
    ("sqr.fm", "https://sqr.fm"),
    ("portafolio micaela", "https://portafolio-micaela.vercel.app"),
    ("Ecolution", "https://ecolution.vercel.app"),
];

fn mount_about(_context: AppMountContext) -> View {
    view! { <AboutApp /> }.into_view()
}

fn mount_projects(_context: AppMountContext) -> View {
    view! { <ProjectsApp /> }.into_view()
}

#[component]
fn AboutApp() -> impl IntoView {
    view! {
        <div class="app app-about">
            <h2>{STUDIO_NAME}</h2>
            <p class="about-blurb">"code + sound studio by flavio manyari"</p>
            <ul class="about-services">
                {STUDIO_SERVICES
                    .iter()
                    .map(|service| view! { <li>{*service}</li> })
                    .collect_view()}
            </ul>
            <p class="about-contact">
                <a href=format!("mailto:{STUDIO_EMAIL}")>{STUDIO_EMAIL}</a>
            </p>
            <ul class="about-links">
                {STUDIO_LINKS
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <li>
                                <a href=*href target="_blank" rel="noreferrer">
                                    {*label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ProjectsApp() -> impl IntoView {
    view! {
        <div class="app app-projects">
            <ul class="project-list">
                {STUDIO_PROJECTS
                    .iter()
                    .map(|(name, href)| {
                        view! {
                            <li>
                                <a href=*href target="_blank" rel="noreferrer">
                                    {*name}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_app_has_a_valid_application_id() {
        for app_id in AppId::ALL {
            let id = application_id(app_id);
            assert!(
                ApplicationId::new(id.as_str()).is_ok(),
                "bad id for {app_id:?}"
            );
        }
    }
}
