//! Asian rows of the bundled country dataset.

/// (name, code) rows — Asia and the Middle East.
pub(crate) const ASIA: &[(&str, &str)] = &[
    ("CINA", "100000156"),
    ("GIAPPONE", "100000392"),
    ("INDIA", "100000356"),
    ("COREA DEL SUD", "100000410"),
    ("COREA DEL NORD", "100000408"),
    ("THAILANDIA", "100000764"),
    ("VIETNAM", "100000704"),
    ("SINGAPORE", "100000702"),
    ("MALESIA", "100000458"),
    ("INDONESIA", "100000360"),
    ("FILIPPINE", "100000608"),
    ("TAIWAN", "100000158"),
    ("HONG KONG", "100000344"),
    ("MACAO", "100000446"),
    ("MONGOLIA", "100000496"),
    ("NEPAL", "100000524"),
    ("BANGLADESH", "100000050"),
    ("SRI LANKA", "100000144"),
    ("PAKISTAN", "100000586"),
    ("AFGHANISTAN", "100000004"),
    ("IRAN", "100000364"),
    ("IRAQ", "100000368"),
    ("TURCHIA", "100000792"),
    ("SIRIA", "100000760"),
    ("LIBANO", "100000422"),
    ("ISRAELE", "100000376"),
    ("GIORDANIA", "100000400"),
    ("ARABIA SAUDITA", "100000682"),
    ("EMIRATI ARABI UNITI", "100000784"),
    ("KUWAIT", "100000414"),
    ("QATAR", "100000634"),
    ("BAHRAIN", "100000048"),
    ("OMAN", "100000512"),
    ("YEMEN", "100000887"),
    ("KAZAKISTAN", "100000398"),
    ("UZBEKISTAN", "100000860"),
    ("KIRGHIZISTAN", "100000417"),
    ("TAGIKISTAN", "100000762"),
    ("TURKMENISTAN", "100000795"),
    ("GEORGIA", "100000268"),
    ("ARMENIA", "100000051"),
    ("AZERBAIGIAN", "100000031"),
    ("BHUTAN", "100000064"),
    ("MALDIVE", "100000462"),
    ("CAMBOGIA", "100000116"),
    ("LAOS", "100000418"),
    ("MYANMAR", "100000104"),
    ("BRUNEI", "100000096"),
];
