//! Indian States and Cities
//!
//! Static dataset feeding the dependent state → city dropdowns. States are
//! keyed by their two-letter state-code; the restaurant endpoint receives the
//! code alongside the state name.

/// One state or union territory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndianState {
    pub name: &'static str,
    pub code: &'static str,
    pub cities: &'static [&'static str],
}

/// Legacy spellings stored on older restaurant records
const STATE_ALIASES: &[(&str, &str)] = &[("Gujrat", "GJ")];

const STATES: &[IndianState] = &[
    IndianState { name: "Andaman and Nicobar Islands", code: "AN", cities: &["Port Blair", "Bamboo Flat", "Garacharma"] },
    IndianState { name: "Andhra Pradesh", code: "AP", cities: &["Visakhapatnam", "Vijayawada", "Guntur", "Nellore", "Tirupati", "Kakinada"] },
    IndianState { name: "Arunachal Pradesh", code: "AR", cities: &["Itanagar", "Naharlagun", "Pasighat", "Tawang"] },
    IndianState { name: "Assam", code: "AS", cities: &["Guwahati", "Silchar", "Dibrugarh", "Jorhat", "Tezpur"] },
    IndianState { name: "Bihar", code: "BR", cities: &["Patna", "Gaya", "Bhagalpur", "Muzaffarpur", "Darbhanga"] },
    IndianState { name: "Chandigarh", code: "CH", cities: &["Chandigarh"] },
    IndianState { name: "Chhattisgarh", code: "CT", cities: &["Raipur", "Bhilai", "Bilaspur", "Korba", "Durg"] },
    IndianState { name: "Dadra and Nagar Haveli", code: "DN", cities: &["Silvassa", "Naroli"] },
    IndianState { name: "Daman and Diu", code: "DD", cities: &["Daman", "Diu"] },
    IndianState { name: "Delhi", code: "DL", cities: &["New Delhi", "Delhi", "Dwarka", "Rohini"] },
    IndianState { name: "Goa", code: "GA", cities: &["Panaji", "Margao", "Vasco da Gama", "Mapusa"] },
    IndianState { name: "Gujarat", code: "GJ", cities: &["Ahmedabad", "Surat", "Vadodara", "Rajkot", "Bhavnagar", "Gandhinagar"] },
    IndianState { name: "Haryana", code: "HR", cities: &["Gurugram", "Faridabad", "Panipat", "Ambala", "Hisar"] },
    IndianState { name: "Himachal Pradesh", code: "HP", cities: &["Shimla", "Manali", "Dharamshala", "Solan", "Mandi"] },
    IndianState { name: "Jammu and Kashmir", code: "JK", cities: &["Srinagar", "Jammu", "Anantnag", "Baramulla"] },
    IndianState { name: "Jharkhand", code: "JH", cities: &["Ranchi", "Jamshedpur", "Dhanbad", "Bokaro"] },
    IndianState { name: "Karnataka", code: "KA", cities: &["Bengaluru", "Mysuru", "Mangaluru", "Hubballi", "Belagavi"] },
    IndianState { name: "Kerala", code: "KL", cities: &["Thiruvananthapuram", "Kochi", "Kozhikode", "Thrissur", "Kollam"] },
    IndianState { name: "Ladakh", code: "LA", cities: &["Leh", "Kargil"] },
    IndianState { name: "Lakshadweep", code: "LD", cities: &["Kavaratti", "Agatti"] },
    IndianState { name: "Madhya Pradesh", code: "MP", cities: &["Indore", "Bhopal", "Jabalpur", "Gwalior", "Ujjain"] },
    IndianState { name: "Maharashtra", code: "MH", cities: &["Mumbai", "Pune", "Nagpur", "Nashik", "Aurangabad", "Thane", "Kolhapur"] },
    IndianState { name: "Manipur", code: "MN", cities: &["Imphal", "Thoubal", "Churachandpur"] },
    IndianState { name: "Meghalaya", code: "ML", cities: &["Shillong", "Tura", "Jowai"] },
    IndianState { name: "Mizoram", code: "MZ", cities: &["Aizawl", "Lunglei", "Champhai"] },
    IndianState { name: "Nagaland", code: "NL", cities: &["Kohima", "Dimapur", "Mokokchung"] },
    IndianState { name: "Odisha", code: "OR", cities: &["Bhubaneswar", "Cuttack", "Rourkela", "Puri", "Sambalpur"] },
    IndianState { name: "Puducherry", code: "PY", cities: &["Puducherry", "Karaikal", "Mahe", "Yanam"] },
    IndianState { name: "Punjab", code: "PB", cities: &["Ludhiana", "Amritsar", "Jalandhar", "Patiala", "Mohali"] },
    IndianState { name: "Rajasthan", code: "RJ", cities: &["Jaipur", "Jodhpur", "Udaipur", "Kota", "Ajmer", "Bikaner"] },
    IndianState { name: "Sikkim", code: "SK", cities: &["Gangtok", "Namchi", "Mangan"] },
    IndianState { name: "Tamil Nadu", code: "TN", cities: &["Chennai", "Coimbatore", "Madurai", "Tiruchirappalli", "Salem"] },
    IndianState { name: "Telangana", code: "TG", cities: &["Hyderabad", "Warangal", "Nizamabad", "Karimnagar"] },
    IndianState { name: "Tripura", code: "TR", cities: &["Agartala", "Udaipur", "Dharmanagar"] },
    IndianState { name: "Uttar Pradesh", code: "UP", cities: &["Lucknow", "Kanpur", "Varanasi", "Agra", "Noida", "Prayagraj"] },
    IndianState { name: "Uttarakhand", code: "UK", cities: &["Dehradun", "Haridwar", "Rishikesh", "Nainital", "Haldwani"] },
    IndianState { name: "West Bengal", code: "WB", cities: &["Kolkata", "Howrah", "Durgapur", "Siliguri", "Asansol"] },
];

/// All states, sorted by name
pub fn states() -> &'static [IndianState] {
    STATES
}

pub fn state_by_code(code: &str) -> Option<&'static IndianState> {
    STATES.iter().find(|s| s.code == code)
}

pub fn state_by_name(name: &str) -> Option<&'static IndianState> {
    let name = name.trim();
    STATES.iter().find(|s| s.name == name).or_else(|| {
        STATE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .and_then(|(_, code)| state_by_code(code))
    })
}

/// Derive the state-code from a stored state name
pub fn state_code(name: &str) -> Option<&'static str> {
    state_by_name(name).map(|s| s.code)
}

/// Cities of a state-code; empty for unknown codes
pub fn cities_of(code: &str) -> &'static [&'static str] {
    state_by_code(code).map(|s| s.cities).unwrap_or(&[])
}
