//! Static copy that does not vary by language.

pub(crate) const TITLE: &str = "superself";

/// BIOS-style lines the boot screen types out.
pub(crate) const BOOT_LINES: [&str; 6] = [
    "superself bios v3.1",
    "640k base memory ... ok",
    "checking taste ........ ok",
    "checking patience ..... ok",
    "mounting /self",
    "boot: ready",
];

/// Crash-screen text, all caps like the machine it pretends to be.
pub(crate) const ERROR_LINES: [&str; 4] = [
    "A fatal exception 0E has occurred at 0028:C0011E36.",
    "The current session will be terminated.",
    "* You were told not to touch.",
    "Press any key to restart.",
];

/// Words looping through the services marquee.
pub(crate) const SERVICES: [&str; 8] = [
    "web design",
    "creative code",
    "sound",
    "identity",
    "art direction",
    "prototypes",
    "installations",
    "consulting",
];

pub(crate) struct Project {
    pub(crate) name: &'static str,
    pub(crate) year: &'static str,
    pub(crate) medium: &'static str,
}

pub(crate) const PROJECTS: [Project; 5] = [
    Project {
        name: "lunar arcade",
        year: "2024",
        medium: "site + sound",
    },
    Project {
        name: "tienda fantasma",
        year: "2023",
        medium: "e-commerce",
    },
    Project {
        name: "ruido blanco",
        year: "2023",
        medium: "installation",
    },
    Project {
        name: "cartas al mar",
        year: "2022",
        medium: "editorial",
    },
    Project {
        name: "pixel jardin",
        year: "2021",
        medium: "webtoy",
    },
];
