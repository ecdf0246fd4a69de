//! Copy shown on the page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    House,
    Fan,
    Battery,
    Bolt,
    Industry,
    Wrench,
}

impl Icon {
    /// Font Awesome classes for the icon.
    pub fn class(self) -> &'static str {
        match self {
            Icon::House => "fa-solid fa-house",
            Icon::Fan => "fa-solid fa-fan",
            Icon::Battery => "fa-solid fa-car-battery",
            Icon::Bolt => "fa-solid fa-bolt",
            Icon::Industry => "fa-solid fa-industry",
            Icon::Wrench => "fa-solid fa-wrench",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Review {
    pub name: &'static str,
    pub location: &'static str,
    pub rating: u8,
    pub comment: &'static str,
}

impl Review {
    /// Five flags, the first `rating` of them set.
    pub fn star_fill(&self) -> [bool; 5] {
        let mut stars = [false; 5];
        for (i, star) in stars.iter_mut().enumerate() {
            *star = i < self.rating as usize;
        }
        stars
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Nav label and the id of the section it scrolls to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub label: &'static str,
    pub id: &'static str,
}

pub const SECTIONS: [Section; 5] = [
    Section { label: "Home", id: "home" },
    Section { label: "Services", id: "services" },
    Section { label: "Reviews", id: "reviews" },
    Section { label: "About", id: "about" },
    Section { label: "Contact", id: "contact" },
];

pub const SERVICES: [Service; 6] = [
    Service {
        icon: Icon::House,
        title: "House Wiring",
        desc: "Complete home wiring, MCB box installation, and earthing.",
    },
    Service {
        icon: Icon::Fan,
        title: "Fan & Lights",
        desc: "Ceiling fans, LED lights, chandeliers, and fancy fitting.",
    },
    Service {
        icon: Icon::Battery,
        title: "Inverter & UPS",
        desc: "New inverter installation, battery maintenance, and connection.",
    },
    Service {
        icon: Icon::Bolt,
        title: "Emergency Repair",
        desc: "24/7 support for short circuits, fuse failures, and power cuts.",
    },
    Service {
        icon: Icon::Industry,
        title: "Commercial Work",
        desc: "Office cabling, shop lighting, and heavy load management.",
    },
    Service {
        icon: Icon::Wrench,
        title: "Appliance Setup",
        desc: "Geyser, AC point, motor starter, and switchboard repairs.",
    },
];

pub const REVIEWS: [Review; 3] = [
    Review {
        name: "Rahul Kumar",
        location: "Kankarbagh",
        rating: 5,
        comment: "Raza bhai ka kaam bahut accha hai. Time par aaye aur fan wiring fix kar di.",
    },
    Review {
        name: "Suman Singh",
        location: "Patna City",
        rating: 5,
        comment: "Professional electrician. Inverter setup was done very neatly. Highly recommended!",
    },
    Review {
        name: "Amit Verma",
        location: "Danapur",
        rating: 4,
        comment: "Good service at affordable rates. Kaam jaldi aur safai se kiya.",
    },
];

pub const STATS: [Stat; 4] = [
    Stat { value: "10+", label: "Years Exp" },
    Stat { value: "500+", label: "Happy Clients" },
    Stat { value: "24/7", label: "Support" },
    Stat { value: "100%", label: "Safety" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_are_between_one_and_five() {
        assert!(REVIEWS.iter().all(|r| (1..=5).contains(&r.rating)));
    }

    #[test]
    fn star_fill_matches_rating() {
        assert_eq!(REVIEWS[2].star_fill(), [true, true, true, true, false]);
        assert_eq!(REVIEWS[0].star_fill(), [true; 5]);
    }

    #[test]
    fn section_ids_are_lowercase_labels() {
        for section in SECTIONS {
            assert_eq!(section.id, section.label.to_lowercase());
        }
    }

    #[test]
    fn every_service_has_copy() {
        for service in SERVICES {
            assert!(!service.title.is_empty());
            assert!(service.desc.ends_with('.'));
        }
    }
}
