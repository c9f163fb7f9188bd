use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(serde::Serialize, ToSchema)]
pub struct HomeTypeDoc {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(ToSchema)]
pub struct SignupRequest { pub username: String, pub email: String, pub password: String, pub role: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct CompanySignupRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub password: String,
}

#[derive(ToSchema)]
pub struct UserDoc { pub id: i32, pub username: String, pub email: String, pub role: String }

#[derive(ToSchema)]
pub struct UserRequest {
    pub username: String,
    pub email: String,
    /// Omitted keeps the current role
    pub role: Option<String>,
    /// Omitted keeps the current password
    pub password: Option<String>,
}

#[derive(ToSchema)]
pub struct UserDashboardDoc { pub message: String, pub user: UserDoc }

#[derive(ToSchema)]
pub struct CompanyDashboardDoc { pub message: String, pub company: CompanyDoc }

#[derive(ToSchema)]
pub struct ProfileDoc {
    pub id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub preferences: Option<String>,
}

#[derive(ToSchema)]
pub struct ProfileRequest {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub preferences: Option<String>,
}

#[derive(ToSchema)]
pub struct ChecklistDoc { pub id: i32, pub user_id: i32, pub home_type: String }

#[derive(ToSchema)]
pub struct ChecklistRequest {
    pub user_id: i32,
    /// Bedsitter, Studio, One Bedroom or Two Bedroom
    pub home_type: String,
}

#[derive(ToSchema)]
pub struct InventoryDoc {
    pub id: i32,
    pub checklist_id: i32,
    pub item_name: String,
    pub status: String,
    pub notes: Option<String>,
}

#[derive(ToSchema)]
pub struct InventoryRequest {
    pub checklist_id: i32,
    pub item_name: String,
    /// Packed or Not Packed
    pub status: String,
    pub notes: Option<String>,
}

#[derive(ToSchema)]
pub struct QuoteDoc { pub id: i32, pub move_id: i32, pub price: f64, pub status: String }

#[derive(ToSchema)]
pub struct QuoteRequest {
    pub move_id: i32,
    pub price: f64,
    /// pending, accepted or rejected; defaults to pending
    pub status: Option<String>,
}

/// Notification or communication.
#[derive(ToSchema)]
pub struct MessageDoc {
    pub id: i32,
    pub booking_id: i32,
    pub message: String,
    pub timestamp: String,
}

#[derive(ToSchema)]
pub struct MessageRequest {
    pub booking_id: i32,
    pub message: String,
    /// Defaults to now
    pub timestamp: Option<String>,
}

#[derive(ToSchema)]
pub struct CompanyDoc {
    pub id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub rating: Option<f64>,
}

#[derive(ToSchema)]
pub struct CompanyRequest {
    pub user_id: Option<i32>,
    pub name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub rating: Option<f64>,
    pub password: Option<String>,
}

#[derive(ToSchema)]
pub struct MoveDoc {
    pub id: i32,
    pub user_id: i32,
    pub company_id: i32,
    pub current_address: String,
    pub new_address: String,
    /// YYYY-MM-DD
    pub moving_date: String,
    pub special_requirements: Option<String>,
}

#[derive(ToSchema)]
pub struct MoveRequest {
    pub user_id: i32,
    pub company_id: i32,
    pub current_address: String,
    pub new_address: String,
    pub moving_date: String,
    pub special_requirements: Option<String>,
}

#[derive(ToSchema)]
pub struct BookingDoc {
    pub id: i32,
    pub quote_id: i32,
    pub customer_id: i32,
    pub moving_company_id: i32,
    pub move_id: i32,
    pub move_date: String,
    /// HH:MM:SS
    pub move_time: String,
    pub confirmation_status: String,
}

#[derive(ToSchema)]
pub struct BookingRequest {
    pub quote_id: i32,
    pub customer_id: i32,
    pub moving_company_id: i32,
    pub move_id: i32,
    pub move_date: String,
    pub move_time: String,
    pub confirmation_status: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::home_types,
        crate::routes::auth::signup,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::auth::check_session,
        crate::routes::auth::company_signup,
        crate::routes::auth::company_login,
        crate::routes::auth::company_logout,
        crate::routes::auth::company_check_session,
        crate::routes::auth::user_dashboard,
        crate::routes::auth::company_dashboard,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::create,
        crate::routes::users::update,
        crate::routes::users::delete,
        crate::routes::profiles::list,
        crate::routes::profiles::get,
        crate::routes::profiles::create,
        crate::routes::profiles::update,
        crate::routes::profiles::delete,
        crate::routes::checklists::list,
        crate::routes::checklists::get,
        crate::routes::checklists::create,
        crate::routes::checklists::update,
        crate::routes::checklists::delete,
        crate::routes::checklists::items,
        crate::routes::inventories::list,
        crate::routes::inventories::get,
        crate::routes::inventories::create,
        crate::routes::inventories::update,
        crate::routes::inventories::delete,
        crate::routes::companies::list,
        crate::routes::companies::get,
        crate::routes::companies::create,
        crate::routes::companies::update,
        crate::routes::companies::delete,
        crate::routes::moves::list,
        crate::routes::moves::get,
        crate::routes::moves::create,
        crate::routes::moves::update,
        crate::routes::moves::delete,
        crate::routes::quotes::list,
        crate::routes::quotes::get,
        crate::routes::quotes::create,
        crate::routes::quotes::update,
        crate::routes::quotes::delete,
        crate::routes::bookings::list,
        crate::routes::bookings::get,
        crate::routes::bookings::create,
        crate::routes::bookings::update,
        crate::routes::bookings::delete,
        crate::routes::notifications::list,
        crate::routes::notifications::get,
        crate::routes::notifications::create,
        crate::routes::notifications::update,
        crate::routes::notifications::delete,
        crate::routes::communications::list,
        crate::routes::communications::get,
        crate::routes::communications::create,
        crate::routes::communications::update,
        crate::routes::communications::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            HomeTypeDoc,
            SignupRequest,
            LoginRequest,
            CompanySignupRequest,
            UserDoc,
            UserRequest,
            UserDashboardDoc,
            CompanyDashboardDoc,
            ProfileDoc,
            ProfileRequest,
            ChecklistDoc,
            ChecklistRequest,
            InventoryDoc,
            InventoryRequest,
            QuoteDoc,
            QuoteRequest,
            MessageDoc,
            MessageRequest,
            CompanyDoc,
            CompanyRequest,
            MoveDoc,
            MoveRequest,
            BookingDoc,
            BookingRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "users"),
        (name = "profiles"),
        (name = "checklists"),
        (name = "inventories"),
        (name = "companies"),
        (name = "moves"),
        (name = "quotes"),
        (name = "bookings"),
        (name = "notifications"),
        (name = "communications")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_auth_and_resource_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/signup", "/user_dashboard", "/company_dashboard", "/checklists/{id}/items", "/home_types"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
        for resource in [
            "users",
            "profiles",
            "checklists",
            "inventories",
            "companies",
            "moves",
            "quotes",
            "bookings",
            "notifications",
            "communications",
        ] {
            assert!(doc.paths.paths.contains_key(&format!("/{}", resource)), "missing /{}", resource);
            assert!(doc.paths.paths.contains_key(&format!("/{}/{{id}}", resource)), "missing /{}/{{id}}", resource);
        }
    }
}
