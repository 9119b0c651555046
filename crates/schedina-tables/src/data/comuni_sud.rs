//! Southern-Italy and islands rows of the bundled municipality dataset.

/// (name, code, province) rows — sud e isole.
pub(crate) const COMUNI_SUD: &[(&str, &str, &str)] = &[
    // ── Campania ──────────────────────────────────────────────────────
    ("NAPOLI", "416063001", "NA"),
    ("POZZUOLI", "416063002", "NA"),
    ("SORRENTO", "416063003", "NA"),
    ("SALERNO", "416065001", "SA"),
    ("AMALFI", "416065002", "SA"),
    ("CASERTA", "416061001", "CE"),
    ("BENEVENTO", "416062001", "BN"),
    ("AVELLINO", "416064001", "AV"),
    // ── Puglia ────────────────────────────────────────────────────────
    ("BARI", "417072001", "BA"),
    ("TARANTO", "417073001", "TA"),
    ("LECCE", "417075001", "LE"),
    ("FOGGIA", "417071001", "FG"),
    ("BRINDISI", "417074001", "BR"),
    ("BARLETTA", "417110001", "BT"),
    ("ANDRIA", "417110002", "BT"),
    ("TRANI", "417110003", "BT"),
    // ── Basilicata ────────────────────────────────────────────────────
    ("POTENZA", "418076001", "PZ"),
    ("MATERA", "418077001", "MT"),
    // ── Calabria ──────────────────────────────────────────────────────
    ("CATANZARO", "419079001", "CZ"),
    ("REGGIO CALABRIA", "419080001", "RC"),
    ("COSENZA", "419078001", "CS"),
    ("CROTONE", "419101001", "KR"),
    ("VIBO VALENTIA", "419102001", "VV"),
    ("TROPEA", "419102002", "VV"),
    // ── Sicilia ───────────────────────────────────────────────────────
    ("PALERMO", "420082001", "PA"),
    ("CEFALU", "420082002", "PA"),
    ("CATANIA", "420087001", "CT"),
    ("MESSINA", "420083001", "ME"),
    ("TAORMINA", "420083002", "ME"),
    ("SIRACUSA", "420089001", "SR"),
    ("RAGUSA", "420088001", "RG"),
    ("TRAPANI", "420081001", "TP"),
    ("AGRIGENTO", "420084001", "AG"),
    ("CALTANISSETTA", "420085001", "CL"),
    ("ENNA", "420086001", "EN"),
    // ── Sardegna ──────────────────────────────────────────────────────
    ("CAGLIARI", "421092001", "CA"),
    ("SASSARI", "421090001", "SS"),
    ("OLBIA", "421090002", "SS"),
    ("ALGHERO", "421090003", "SS"),
    ("NUORO", "421091001", "NU"),
    ("ORISTANO", "421095001", "OR"),
];
