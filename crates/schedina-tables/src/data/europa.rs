//! Europe rows of the bundled country dataset.

/// (name, code) rows — Europe.
pub(crate) const EUROPA: &[(&str, &str)] = &[
    ("ITALIA", "100000100"),
    ("FRANCIA", "100000110"),
    ("GERMANIA", "100000112"),
    ("SPAGNA", "100000134"),
    ("REGNO UNITO", "100000135"),
    ("AUSTRIA", "100000103"),
    ("BELGIO", "100000104"),
    ("SVIZZERA", "100000136"),
    ("PAESI BASSI", "100000123"),
    ("PORTOGALLO", "100000127"),
    ("GRECIA", "100000114"),
    ("CROAZIA", "100000191"),
    ("SLOVENIA", "100000192"),
    ("POLONIA", "100000126"),
    ("REPUBBLICA CECA", "100000203"),
    ("UNGHERIA", "100000139"),
    ("ROMANIA", "100000128"),
    ("BULGARIA", "100000106"),
    ("SERBIA", "100000188"),
    ("MONTENEGRO", "100000273"),
    ("BOSNIA ERZEGOVINA", "100000070"),
    ("ALBANIA", "100000101"),
    ("MACEDONIA DEL NORD", "100000294"),
    ("NORVEGIA", "100000122"),
    ("SVEZIA", "100000137"),
    ("DANIMARCA", "100000108"),
    ("FINLANDIA", "100000111"),
    ("IRLANDA", "100000117"),
    ("ISLANDA", "100000116"),
    ("LUSSEMBURGO", "100000119"),
    ("MALTA", "100000121"),
    ("CIPRO", "100000196"),
    ("ESTONIA", "100000233"),
    ("LETTONIA", "100000234"),
    ("LITUANIA", "100000235"),
    ("SLOVACCHIA", "100000245"),
    ("UCRAINA", "100000804"),
    ("BIELORUSSIA", "100000112"),
    ("MOLDAVIA", "100000498"),
    ("RUSSIA", "100000643"),
    ("KOSOVO", "100000383"),
    ("ANDORRA", "100000020"),
    ("MONACO", "100000492"),
    ("LIECHTENSTEIN", "100000438"),
    ("SAN MARINO", "100000674"),
    ("VATICANO", "100000336"),
];
