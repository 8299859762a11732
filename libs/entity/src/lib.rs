pub mod content;
pub mod poll;
pub mod population;
pub mod post;
mod schedule;
pub mod status;
pub mod sublet;
pub mod user;

pub mod prelude {
    pub use crate::content::{Content, ContentKind};
    pub use crate::poll::{Poll as PollEntity, PollOption as PollOptionEntity};
    pub use crate::population::Population as PopulationEntity;
    pub use crate::post::Post as PostEntity;
    pub use crate::status::Status;
    pub use crate::sublet::{
        ListingState, Offer as OfferEntity, Sublet as SubletEntity,
        SubletImage as SubletImageEntity,
    };
    pub use crate::user::{AuthContext, User as UserEntity};
}
