mod card;
mod card_header;
mod expand_icon;
mod flat_button;
mod header;
mod nav_link;
mod post_card;
mod post_list;

pub use card::{Card, CardActions, CardText};
pub use card_header::CardHeader;
pub use flat_button::FlatButton;
pub use header::Header;
pub use nav_link::NavLink;
pub use post_card::PostCard;
pub use post_list::PostList;

// Unit Tests ==========================================================================================================
