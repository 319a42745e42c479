//! Built-in lookup tables.
//!
//! Keywords use the matcher syntax described on [`crate::rules::Rules`]:
//! whole word or phrase by default, a trailing `*` for a word prefix.

pub(super) const COUNTRIES: &[&str] = &[
    "Afghanistan", "Albania", "Algeria", "Andorra", "Angola", "Argentina", "Armenia",
    "Australia", "Austria", "Azerbaijan", "Bahamas", "Bahrain", "Bangladesh", "Barbados",
    "Belarus", "Belgium", "Belize", "Benin", "Bhutan", "Bolivia", "Bosnia and Herzegovina",
    "Botswana", "Brazil", "Brunei", "Bulgaria", "Burkina Faso", "Burundi", "Cambodia",
    "Cameroon", "Canada", "Cape Verde", "Chad", "Chile", "China", "Colombia", "Congo",
    "Costa Rica", "Croatia", "Cuba", "Cyprus", "Czech Republic", "Czechia", "Denmark",
    "Djibouti", "Dominican Republic", "Ecuador", "Egypt", "El Salvador", "England",
    "Eritrea", "Estonia", "Eswatini", "Ethiopia", "Fiji", "Finland", "France", "Gabon",
    "Gambia", "Germany", "Ghana", "Greece", "Grenada", "Guatemala", "Guinea", "Guyana",
    "Haiti", "Honduras", "Hong Kong", "Hungary", "Iceland", "India", "Indonesia", "Iran",
    "Iraq", "Ireland", "Israel", "Italy", "Jamaica", "Japan", "Jordan", "Kazakhstan",
    "Kenya", "Korea", "Kosovo", "Kuwait", "Kyrgyzstan", "Laos", "Latvia", "Lebanon",
    "Lesotho", "Liberia", "Libya", "Liechtenstein", "Lithuania", "Luxembourg", "Macau",
    "Madagascar", "Malawi", "Malaysia", "Maldives", "Mali", "Malta", "Mauritania",
    "Mauritius", "Mexico", "Moldova", "Monaco", "Mongolia", "Montenegro", "Morocco",
    "Mozambique", "Myanmar", "Namibia", "Nepal", "Netherlands", "New Zealand", "Nicaragua",
    "Niger", "Nigeria", "North Korea", "North Macedonia", "Norway", "Oman", "Pakistan",
    "Palestine", "Panama", "Papua New Guinea", "Paraguay", "Peru", "Philippines", "Poland",
    "Portugal", "Puerto Rico", "Qatar", "Romania", "Russia", "Rwanda", "Saudi Arabia",
    "Scotland", "Senegal", "Serbia", "Sierra Leone", "Singapore", "Slovakia", "Slovenia",
    "Somalia", "South Africa", "South Korea", "South Sudan", "Spain", "Sri Lanka", "Sudan",
    "Suriname", "Sweden", "Switzerland", "Syria", "Taiwan", "Tajikistan", "Tanzania",
    "Thailand", "Togo", "Trinidad and Tobago", "Tunisia", "Turkey", "Turkmenistan",
    "Uganda", "Ukraine", "United Arab Emirates", "United Kingdom", "United States",
    "Uruguay", "Uzbekistan", "Venezuela", "Vietnam", "Wales", "Yemen", "Zambia", "Zimbabwe",
];

/// Scopus spelling -> Web of Science spelling.
pub(super) const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("United States", "USA"),
    ("United States of America", "USA"),
    ("US", "USA"),
    ("U.S.A.", "USA"),
    ("China", "Peoples R China"),
    ("People's Republic of China", "Peoples R China"),
    ("PR China", "Peoples R China"),
    ("P.R. China", "Peoples R China"),
    ("United Kingdom", "England"),
    ("UK", "England"),
    ("Great Britain", "England"),
    ("Northern Ireland", "North Ireland"),
    ("Turkey", "Turkiye"),
    ("Türkiye", "Turkiye"),
    ("Korea", "South Korea"),
    ("Republic of Korea", "South Korea"),
    ("Russian Federation", "Russia"),
    ("Viet Nam", "Vietnam"),
    ("Czechia", "Czech Republic"),
    ("Islamic Republic of Iran", "Iran"),
    ("Hong Kong SAR", "Hong Kong"),
    ("Macao", "Macau"),
    ("Brunei Darussalam", "Brunei"),
    ("Syrian Arab Republic", "Syria"),
];

pub(super) const SECONDARY_KEYWORDS: &[&str] = &[
    "Department*", "Dept", "Dipartimento", "Departamento", "Département", "Departement",
    "Division*", "Divisione", "Div", "Unit", "Units", "Unità", "Unidad", "Unité", "Unite",
    "Laborator*", "Lab", "Labs", "Service", "Services", "Servizio", "Servicio", "Section",
    "Sezione", "Sect", "Faculty", "Facoltà", "Fac", "Program", "Programme",
];

pub(super) const PRIMARY_KEYWORDS: &[&str] = &[
    "Universit*", "Universidad*", "Universidade", "Univ", "Hospital*", "Ospedal*",
    "Hôpital", "Hopital", "Hosp", "Institut*", "Istitut*", "Inst", "Foundation",
    "Fondazione", "Fundación", "Fundacion", "Fdn", "IRCCS", "Policlinic*", "Policlin",
    "Clinic", "Clinics", "Klinik*", "Center", "Centre", "Centro", "Ctr", "Academy",
    "Accademia", "Academia", "Akademie", "Acad", "Council", "Agency", "Ministry",
    "Corporation", "Company", "Inc", "Ltd", "GmbH",
];

pub(super) const AMBIGUOUS_KEYWORDS: &[&str] = &[
    "College", "Colleges", "School", "Schools", "Coll", "Sch", "Collegio", "Escuela",
    "Ecole", "École",
];

pub(super) const UNIVERSITY_KEYWORDS: &[&str] =
    &["Universit*", "Universidad*", "Universidade", "Univ"];

pub(super) const PROFESSIONAL_QUALIFIERS: &[&str] = &[
    "Medic*", "Med", "Law", "Business", "Engineering", "Engn", "Public Health",
    "Publ Hlth", "Pharmac*", "Pharm", "Nursing", "Nurs", "Veterinary", "Vet", "Dental",
    "Dentistry", "Dent", "Osteopathic", "Optometry", "Management", "Mines",
];

pub(super) const INDEPENDENT_INSTITUTIONS: &[&str] = &[
    "Imperial College London",
    "King's College London",
    "University College London",
    "Boston College",
    "Dartmouth College",
    "Trinity College Dublin",
    "Harvard Medical School",
    "Baylor College of Medicine",
    "Icahn School of Medicine at Mount Sinai",
    "Albert Einstein College of Medicine",
    "Medical College of Wisconsin",
    "Weill Cornell Medical College",
    "Royal College of Surgeons in Ireland",
    "London School of Economics",
    "London School of Hygiene and Tropical Medicine",
    "Ecole Polytechnique",
    "École Polytechnique",
    "Ecole Normale Superieure",
];

pub(super) const PROPER_NAME_TERMS: &[&str] = &["College", "Coll"];

pub(super) const ABBREVIATIONS: &[(&str, &str)] = &[
    ("degli Studi di", ""),
    ("degli Studi", ""),
    ("Università di", "Univ"),
    ("Universita di", "Univ"),
    ("Department", "Dept"),
    ("Departments", "Dept"),
    ("Dipartimento", "Dept"),
    ("Departamento", "Dept"),
    ("Département", "Dept"),
    ("Division", "Div"),
    ("University", "Univ"),
    ("Università", "Univ"),
    ("Universita", "Univ"),
    ("Universität", "Univ"),
    ("Universitat", "Univ"),
    ("Université", "Univ"),
    ("Universidad", "Univ"),
    ("Universidade", "Univ"),
    ("Foundation", "Fdn"),
    ("Fondazione", "Fdn"),
    ("Fundación", "Fdn"),
    ("Institute", "Inst"),
    ("Institut", "Inst"),
    ("Instituto", "Inst"),
    ("Istituto", "Inst"),
    ("Hospital", "Hosp"),
    ("Hospitals", "Hosp"),
    ("Ospedale", "Hosp"),
    ("Hôpital", "Hosp"),
    ("Hopital", "Hosp"),
    ("Policlinico", "Policlin"),
    ("Center", "Ctr"),
    ("Centre", "Ctr"),
    ("Centro", "Ctr"),
    ("Laboratory", "Lab"),
    ("Laboratories", "Labs"),
    ("Academy", "Acad"),
    ("College", "Coll"),
    ("School", "Sch"),
    ("Faculty", "Fac"),
    ("Graduate", "Grad"),
    ("Research", "Res"),
    ("Science", "Sci"),
    ("Sciences", "Sci"),
    ("Scientifici", "Sci"),
    ("Technology", "Technol"),
    ("Medicine", "Med"),
    ("Medical", "Med"),
    ("Clinical", "Clin"),
    ("Clinici", "Clin"),
    ("National", "Natl"),
    ("International", "Int"),
    ("Advanced", "Adv"),
    ("Experimental", "Expt"),
    ("Translational", "Translat"),
    ("Molecular", "Mol"),
    ("Environmental", "Environm"),
    ("Public", "Publ"),
    ("Health", "Hlth"),
    ("Pathology", "Pathol"),
    ("Biology", "Biol"),
    ("Biochemistry", "Biochem"),
    ("Chemistry", "Chem"),
    ("Physics", "Phys"),
    ("Mathematics", "Math"),
    ("Statistics", "Stat"),
    ("Computer", "Comp"),
    ("Informatics", "Informat"),
    ("Engineering", "Engn"),
    ("Economics", "Econ"),
    ("Agricultural", "Agr"),
    ("Pharmacy", "Pharm"),
    ("Pharmacology", "Pharmacol"),
    ("Veterinary", "Vet"),
    ("Dentistry", "Dent"),
    ("Oncology", "Oncol"),
    ("Surgery", "Surg"),
    ("Gastroenterology", "Gastroenterol"),
    ("Cardiology", "Cardiol"),
    ("Neurology", "Neurol"),
    ("Pediatrics", "Pediat"),
    ("Psychiatry", "Psychiat"),
    ("Radiology", "Radiol"),
    ("Immunology", "Immunol"),
    ("Microbiology", "Microbiol"),
    ("Epidemiology", "Epidemiol"),
];

pub(super) const FILLER_WORDS: &[&str] = &["of", "for", "the", "in", "at", "on"];

pub(super) const SUMMARY_KEYWORDS: &[&str] = &[
    "Medical Center", "Laboratory", "Laboratories", "Laboratorio", "Corporation",
    "Company", "Ltd", "Ministry", "Government",
];

pub(super) const SECONDARY_PREFIXES: &[&str] = &[
    "Department of", "Departments of", "Dept of", "Dept.", "Division of", "Div of",
    "Section of", "Unit of", "Laboratory of", "Center for", "Centre for",
    "Dipartimento di", "Departamento de", "Faculty of", "Service of",
];

/// Applied in order, so longer phrases come before the words they contain.
pub(super) const NAME_CLEANING: &[(&str, &str)] = &[
    ("Università degli Studi di", "University of"),
    ("Universita degli Studi di", "University of"),
    ("Università di", "University of"),
    ("Università", "University"),
    ("Universidad de", "University of"),
    ("Universidade de", "University of"),
    ("Université de", "University of"),
    ("Universidad", "University"),
    ("Universidade", "University"),
    ("Université", "University"),
    ("Universität", "University"),
    ("Ospedale", "Hospital"),
    ("Istituto", "Institute"),
    ("Fondazione IRCCS", "IRCCS Fondazione"),
];

pub(super) const MIN_SUMMARY_CHARS: usize = 10;

pub(super) fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub(super) fn owned_pairs(values: &[(&str, &str)]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}
