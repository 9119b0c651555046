//! Oceanian rows of the bundled country dataset.

/// (name, code) rows — Oceania.
pub(crate) const OCEANIA: &[(&str, &str)] = &[
    ("AUSTRALIA", "100000036"),
    ("NUOVA ZELANDA", "100000554"),
    ("FIJI", "100000242"),
    ("PAPUA NUOVA GUINEA", "100000598"),
    ("VANUATU", "100000548"),
    ("SAMOA", "100000882"),
    ("TONGA", "100000776"),
    ("KIRIBATI", "100000296"),
    ("TUVALU", "100000798"),
    ("NAURU", "100000520"),
    ("PALAU", "100000585"),
    ("ISOLE MARSHALL", "100000584"),
];
