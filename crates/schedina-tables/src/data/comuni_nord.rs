//! Northern-Italy rows of the bundled municipality dataset.

/// (name, code, province) rows — nord.
pub(crate) const COMUNI_NORD: &[(&str, &str, &str)] = &[
    // ── Piemonte / Valle d'Aosta ──────────────────────────────────────
    ("TORINO", "401272001", "TO"),
    ("MONCALIERI", "401272002", "TO"),
    ("RIVOLI", "401272003", "TO"),
    ("ALESSANDRIA", "401006001", "AL"),
    ("ASTI", "401005001", "AT"),
    ("NOVARA", "401103001", "NO"),
    ("CUNEO", "401004001", "CN"),
    ("VERBANIA", "401102001", "VB"),
    ("VERCELLI", "401002001", "VC"),
    ("BIELLA", "401096001", "BI"),
    ("AOSTA", "402007001", "AO"),
    // ── Liguria ───────────────────────────────────────────────────────
    ("GENOVA", "407010001", "GE"),
    ("SAVONA", "407009001", "SV"),
    ("LA SPEZIA", "407011001", "SP"),
    ("IMPERIA", "407008001", "IM"),
    ("SANREMO", "407008002", "IM"),
    // ── Lombardia ─────────────────────────────────────────────────────
    ("MILANO", "415146001", "MI"),
    ("SESTO SAN GIOVANNI", "415146002", "MI"),
    ("LEGNANO", "415146003", "MI"),
    ("MONZA", "415108001", "MB"),
    ("BERGAMO", "403016001", "BG"),
    ("BRESCIA", "403017001", "BS"),
    ("COMO", "403013001", "CO"),
    ("VARESE", "403012001", "VA"),
    ("PAVIA", "403018001", "PV"),
    ("CREMONA", "403019001", "CR"),
    ("MANTOVA", "403020001", "MN"),
    ("LECCO", "403097001", "LC"),
    ("LODI", "403098001", "LO"),
    ("SONDRIO", "403014001", "SO"),
    // ── Trentino-Alto Adige ───────────────────────────────────────────
    ("TRENTO", "404022001", "TN"),
    ("ROVERETO", "404022002", "TN"),
    ("BOLZANO", "404021001", "BZ"),
    ("MERANO", "404021002", "BZ"),
    // ── Veneto ────────────────────────────────────────────────────────
    ("VENEZIA", "405027001", "VE"),
    ("CHIOGGIA", "405027002", "VE"),
    ("VERONA", "405023001", "VR"),
    ("PADOVA", "405028001", "PD"),
    ("VICENZA", "405024001", "VI"),
    ("TREVISO", "405026001", "TV"),
    ("ROVIGO", "405029001", "RO"),
    ("BELLUNO", "405025001", "BL"),
    // ── Friuli-Venezia Giulia ─────────────────────────────────────────
    ("TRIESTE", "406032001", "TS"),
    ("UDINE", "406030001", "UD"),
    ("PORDENONE", "406093001", "PN"),
    ("GORIZIA", "406031001", "GO"),
    // ── Emilia-Romagna ────────────────────────────────────────────────
    ("BOLOGNA", "408037006", "BO"),
    ("IMOLA", "408037007", "BO"),
    ("MODENA", "408036001", "MO"),
    ("PARMA", "408034001", "PR"),
    ("REGGIO EMILIA", "408035001", "RE"),
    ("FERRARA", "408038001", "FE"),
    ("RAVENNA", "408039001", "RA"),
    ("FORLI", "408040001", "FC"),
    ("CESENA", "408040002", "FC"),
    ("RIMINI", "408099001", "RN"),
    ("PIACENZA", "408033001", "PC"),
];
