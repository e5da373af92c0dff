use super::*;

fn review(rating: u32) -> Review {
    Review {
        id: format!("r{rating}"),
        listing_id: "t1".to_owned(),
        tourist_id: "u1".to_owned(),
        tourist: None,
        rating,
        comment: None,
        created_at: None,
    }
}

#[test]
fn format_price_drops_decimals_for_whole_amounts() {
    assert_eq!(format_price(45.0), "$45");
    assert_eq!(format_price(45.5), "$45.50");
}

#[test]
fn format_rating_keeps_one_decimal() {
    assert_eq!(format_rating(4.0), "4.0");
    assert_eq!(format_rating(4.85), "4.9");
}

#[test]
fn average_rating_is_the_mean_of_the_reviews() {
    assert_eq!(average_rating(&[]), None);
    assert_eq!(average_rating(&[review(4), review(5)]), Some(4.5));
}

#[test]
fn first_name_takes_the_leading_word() {
    assert_eq!(first_name("Ana Perez"), "Ana");
    assert_eq!(first_name("Cher"), "Cher");
    assert_eq!(first_name(""), "");
}
