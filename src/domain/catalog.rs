//! # Catalog
//!
//! Static business data: the services offered by the intake wizard, the ceiling types
//! and unit prices used by the calculator, the public price list and company details.

/// Services a customer can order through the intake wizard, in menu order.
pub const INTAKE_SERVICES: [&str; 5] = [
    "Stretch ceilings",
    "Multi-level ceilings",
    "3D ceilings with photo print",
    "Turnkey renovation",
    "Interior design",
];

/// Looks up an intake service by its 1-based menu number.
pub fn intake_service(number: usize) -> Option<&'static str> {
    number
        .checked_sub(1)
        .and_then(|i| INTAKE_SERVICES.get(i))
        .copied()
}

/// Ceiling types the price calculator knows a unit price for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CeilingType {
    Stretch,
    MultiLevel,
    PhotoPrint3d,
    PhotoWallpaper,
}

impl CeilingType {
    pub const ALL: [CeilingType; 4] = [
        CeilingType::Stretch,
        CeilingType::MultiLevel,
        CeilingType::PhotoPrint3d,
        CeilingType::PhotoWallpaper,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            CeilingType::Stretch => "ceiling",
            CeilingType::MultiLevel => "multi",
            CeilingType::PhotoPrint3d => "3d",
            CeilingType::PhotoWallpaper => "photo",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// 1-based position in the calculator menu.
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            CeilingType::Stretch => "Stretch ceilings",
            CeilingType::MultiLevel => "Multi-level ceilings",
            CeilingType::PhotoPrint3d => "3D ceilings with photo print",
            CeilingType::PhotoWallpaper => "Photo wallpaper ceilings",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            CeilingType::Stretch => "Stretch",
            CeilingType::MultiLevel => "Multi-level",
            CeilingType::PhotoPrint3d => "3D ceilings",
            CeilingType::PhotoWallpaper => "Photo wallpaper",
        }
    }

    /// Price per m² in rubles.
    pub fn unit_price(&self) -> u32 {
        match self {
            CeilingType::Stretch => 2000,
            CeilingType::MultiLevel => 4500,
            CeilingType::PhotoPrint3d => 3500,
            CeilingType::PhotoWallpaper => 3000,
        }
    }
}

/// One line of the public price list.
pub struct PriceEntry {
    pub name: &'static str,
    pub price: &'static str,
}

pub const PRICE_LIST: [PriceEntry; 7] = [
    PriceEntry { name: "Stretch ceilings", price: "from 2000 ₽/m²" },
    PriceEntry { name: "Multi-level ceilings", price: "from 4500 ₽/m²" },
    PriceEntry { name: "3D ceilings with photo print", price: "from 3500 ₽/m²" },
    PriceEntry { name: "Photo wallpaper ceilings", price: "from 3000 ₽/m²" },
    PriceEntry { name: "Fabric ceilings", price: "from 2500 ₽/m²" },
    PriceEntry { name: "Turnkey renovation", price: "on request" },
    PriceEntry { name: "Interior design", price: "on request" },
];

/// Topics with a detail page in the services menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceTopic {
    Stretch,
    MultiLevel,
    PhotoPrint3d,
    Renovation,
    Design,
    PhotoWallpaper,
    Fabric,
    Satin,
    Glossy,
    Matte,
}

impl ServiceTopic {
    pub const ALL: [ServiceTopic; 10] = [
        ServiceTopic::Stretch,
        ServiceTopic::MultiLevel,
        ServiceTopic::PhotoPrint3d,
        ServiceTopic::Renovation,
        ServiceTopic::Design,
        ServiceTopic::PhotoWallpaper,
        ServiceTopic::Fabric,
        ServiceTopic::Satin,
        ServiceTopic::Glossy,
        ServiceTopic::Matte,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ServiceTopic::Stretch => "ceiling",
            ServiceTopic::MultiLevel => "multi",
            ServiceTopic::PhotoPrint3d => "3d",
            ServiceTopic::Renovation => "repair",
            ServiceTopic::Design => "design",
            ServiceTopic::PhotoWallpaper => "photowall",
            ServiceTopic::Fabric => "fabric",
            ServiceTopic::Satin => "satin",
            ServiceTopic::Glossy => "glossy",
            ServiceTopic::Matte => "matte",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceTopic::Stretch => "Stretch ceilings",
            ServiceTopic::MultiLevel => "Multi-level",
            ServiceTopic::PhotoPrint3d => "3D ceilings",
            ServiceTopic::Renovation => "Turnkey renovation",
            ServiceTopic::Design => "Interior design",
            ServiceTopic::PhotoWallpaper => "Photo wallpaper",
            ServiceTopic::Fabric => "Fabric",
            ServiceTopic::Satin => "Satin",
            ServiceTopic::Glossy => "Glossy",
            ServiceTopic::Matte => "Matte",
        }
    }
}

pub mod company {
    pub const NAME: &str = "Potolkoff";
    pub const FULL_NAME: &str = "Stretch ceiling, renovation and interior design studio";
    pub const SLOGAN: &str = "Bringing light and comfort to your home";
    pub const REGION: &str = "Ulan-Ude and Buryatia";

    pub const OBJECTS: &str = "1200+";
    pub const CLIENTS: &str = "500+";
    pub const YEARS: &str = "8";
    pub const SATISFACTION: &str = "98%";

    pub const PHONE: &str = "+7 (983) 420-88-05";
    pub const TELEGRAM: &str = "potolkoff2024";
    pub const VK: &str = "potolkoff03";
    pub const INSTAGRAM: &str = "potolkoff_03";
    pub const WORKING_HOURS: &str = "Mon-Fri: 9:00 - 18:00\nSat-Sun: closed";

    pub const FEATURES: [&str; 5] = [
        "Certified installers and designers",
        "5-year warranty on all work",
        "Free on-site measurement",
        "An individual approach to every client",
        "Turnkey renovation",
    ];

    pub fn telegram_url() -> String {
        format!("https://t.me/{TELEGRAM}")
    }

    pub fn vk_url() -> String {
        format!("https://vk.com/{VK}")
    }

    pub fn instagram_url() -> String {
        format!("https://instagram.com/{INSTAGRAM}")
    }

    /// `tel:` link with the formatting stripped.
    pub fn phone_url() -> String {
        let digits: String = PHONE
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intake_service_numbers_are_one_based() {
        assert_eq!(intake_service(1), Some("Stretch ceilings"));
        assert_eq!(intake_service(5), Some("Interior design"));
        assert_eq!(intake_service(0), None);
        assert_eq!(intake_service(6), None);
    }

    #[test]
    fn test_ceiling_codes_resolve() {
        for kind in CeilingType::ALL {
            assert_eq!(CeilingType::from_code(kind.code()), Some(kind));
        }
        assert_eq!(CeilingType::from_code("fabric"), None);
        assert_eq!(CeilingType::from_number(2), Some(CeilingType::MultiLevel));
    }

    #[test]
    fn test_phone_url() {
        assert_eq!(company::phone_url(), "tel:+79834208805");
    }
}
