//! African rows of the bundled country dataset.

/// (name, code) rows — Africa.
pub(crate) const AFRICA: &[(&str, &str)] = &[
    ("SUDAFRICA", "100000710"),
    ("EGITTO", "100000818"),
    ("MAROCCO", "100000504"),
    ("TUNISIA", "100000788"),
    ("ALGERIA", "100000012"),
    ("LIBIA", "100000434"),
    ("NIGERIA", "100000566"),
    ("KENYA", "100000404"),
    ("ETIOPIA", "100000231"),
    ("GHANA", "100000288"),
    ("SENEGAL", "100000686"),
    ("COSTA D'AVORIO", "100000384"),
    ("CAMERUN", "100000120"),
    ("UGANDA", "100000800"),
    ("TANZANIA", "100000834"),
    ("MOZAMBICO", "100000508"),
    ("MADAGASCAR", "100000450"),
    ("ANGOLA", "100000024"),
    ("ZAMBIA", "100000894"),
    ("ZIMBABWE", "100000716"),
    ("BOTSWANA", "100000072"),
    ("NAMIBIA", "100000516"),
    ("SUDAN", "100000729"),
    ("SUDAN DEL SUD", "100000728"),
    ("CONGO", "100000178"),
    ("REPUBBLICA DEM. CONGO", "100000180"),
    ("GABON", "100000266"),
    ("GUINEA EQUATORIALE", "100000226"),
    ("CIAD", "100000148"),
    ("REPUBBLICA CENTRAFRICANA", "100000140"),
    ("MALI", "100000466"),
    ("BURKINA FASO", "100000854"),
    ("NIGER", "100000562"),
    ("MAURITANIA", "100000478"),
    ("TOGO", "100000768"),
    ("BENIN", "100000204"),
    ("GUINEA", "100000324"),
    ("GUINEA-BISSAU", "100000624"),
    ("SIERRA LEONE", "100000694"),
    ("LIBERIA", "100000430"),
    ("GAMBIA", "100000270"),
    ("CAPO VERDE", "100000132"),
    ("SAO TOME E PRINCIPE", "100000678"),
    ("RUANDA", "100000646"),
    ("BURUNDI", "100000108"),
    ("GIBUTI", "100000262"),
    ("SOMALIA", "100000706"),
    ("ERITREA", "100000232"),
    ("LESOTHO", "100000426"),
    ("SWAZILAND", "100000748"),
    ("MALAWI", "100000454"),
    ("MAURITIUS", "100000480"),
    ("SEYCHELLES", "100000690"),
    ("COMORE", "100000174"),
];
