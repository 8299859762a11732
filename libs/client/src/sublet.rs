//! Sublet marketplace endpoints under `/api/sublet/`.

pub mod amenities;
pub mod listings;
pub mod offers;

static LIST_SUBLETS: &str = "api/sublet/listSublets";
static CREATE_SUBLET: &str = "api/sublet/createSublet";
static UPDATE_SUBLET: &str = "api/sublet/updateSublet/";
static DESTROY_SUBLET: &str = "api/sublet/destroySublet/";
static CREATE_SUBLET_IMAGE: &str = "api/sublet/createSubletImage/";
static LIST_OFFERS: &str = "api/sublet/listOffers/";
static CREATE_OFFER: &str = "api/sublet/createOffer/";
static DESTROY_OFFER: &str = "api/sublet/destroyOffer/";
static LIST_AMENITIES: &str = "api/sublet/listAmenities";
