/// Listing data shown in the featured grid
///
/// Listings are compile-time literals; nothing is fetched or stored.

/// Asset shown when a listing has no image of its own
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A single rental listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    pub title: &'static str,
    pub location: &'static str,
    /// Monthly rent in whole currency units
    pub price: u32,
    /// Web-style asset path, e.g. "/placeholder.svg"
    pub image: &'static str,
    /// Display order matters; duplicates are allowed
    pub tags: &'static [&'static str],
}

impl Listing {
    /// Image reference to render, falling back to the placeholder
    pub fn image_or_placeholder(&self) -> &'static str {
        if self.image.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            self.image
        }
    }

    pub fn formatted_price(&self) -> String {
        format_price(self.price)
    }
}

/// The featured listings, in display order
pub static FEATURED: [Listing; 3] = [
    Listing {
        title: "Luxury Apartment",
        location: "New York, NY",
        price: 2500,
        image: PLACEHOLDER_IMAGE,
        tags: &["Pet Friendly", "Remote Work Ready", "Gym Access"],
    },
    Listing {
        title: "Modern Loft",
        location: "San Francisco, CA",
        price: 3200,
        image: PLACEHOLDER_IMAGE,
        tags: &["City View", "Smart Home", "Parking"],
    },
    Listing {
        title: "Waterfront Villa",
        location: "Miami, FL",
        price: 5000,
        image: PLACEHOLDER_IMAGE,
        tags: &["Pool", "Beach Access", "24/7 Security"],
    },
];

/// Format a monthly rent as "$2,500/mo"
pub fn format_price(price: u32) -> String {
    format!("${}/mo", group_thousands(price))
}

/// Insert a comma between every group of three digits
fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(2500), "$2,500/mo");
        assert_eq!(format_price(3200), "$3,200/mo");
        assert_eq!(format_price(0), "$0/mo");
        assert_eq!(format_price(999), "$999/mo");
        assert_eq!(format_price(1_000), "$1,000/mo");
        assert_eq!(format_price(1_234_567), "$1,234,567/mo");
    }

    #[test]
    fn test_featured_order_and_content() {
        let titles: Vec<_> = FEATURED.iter().map(|l| l.title).collect();
        assert_eq!(titles, ["Luxury Apartment", "Modern Loft", "Waterfront Villa"]);

        let locations: Vec<_> = FEATURED.iter().map(|l| l.location).collect();
        assert_eq!(locations, ["New York, NY", "San Francisco, CA", "Miami, FL"]);

        assert_eq!(FEATURED[0].formatted_price(), "$2,500/mo");
        assert_eq!(FEATURED[1].formatted_price(), "$3,200/mo");
        assert_eq!(FEATURED[2].formatted_price(), "$5,000/mo");

        assert_eq!(FEATURED[2].tags, ["Pool", "Beach Access", "24/7 Security"]);
    }

    #[test]
    fn test_empty_image_falls_back_to_placeholder() {
        let listing = Listing {
            image: "",
            ..FEATURED[0]
        };
        assert_eq!(listing.image_or_placeholder(), PLACEHOLDER_IMAGE);

        // Only the empty string is missing; anything else is passed through
        let listing = Listing {
            image: "  ",
            ..FEATURED[0]
        };
        assert_eq!(listing.image_or_placeholder(), "  ");

        let listing = Listing {
            image: "/photos/loft.jpg",
            ..FEATURED[1]
        };
        assert_eq!(listing.image_or_placeholder(), "/photos/loft.jpg");
    }
}
