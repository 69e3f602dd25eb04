//! OpenAPI document served under `/docs-json`

use utoipa::{
    Modify, OpenApi,
    openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::{error, handlers, middleware::API_KEY_HEADER, models};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rental Manager API",
        description = "Boarding house management: users, tenants, rooms, rents and finances."
    ),
    paths(
        handlers::app::root,
        handlers::users::login,
        handlers::users::find_all,
        handlers::users::find_one,
        handlers::users::update,
        handlers::users::delete,
        handlers::tenants::create_tenant,
        handlers::tenants::get_tenants,
        handlers::tenants::get_tenant,
        handlers::tenants::update_tenant,
        handlers::tenants::delete_tenant,
        handlers::room_types::create_room_type,
        handlers::room_types::get_room_types,
        handlers::room_types::get_room_type,
        handlers::room_types::update_room_type,
        handlers::room_types::delete_room_type,
        handlers::facilities::create_facility,
        handlers::facilities::get_facilities,
        handlers::facilities::get_facility,
        handlers::facilities::update_facility,
        handlers::facilities::delete_facility,
        handlers::rooms::create_room,
        handlers::rooms::get_rooms,
        handlers::rooms::get_room,
        handlers::rooms::update_room,
        handlers::rooms::delete_room,
        handlers::rents::create_rent,
        handlers::rents::get_rents,
        handlers::rents::get_rent,
        handlers::rents::update_rent,
        handlers::rents::end_rent,
        handlers::rents::delete_rent,
        handlers::finances::create_finance,
        handlers::finances::get_finances,
        handlers::finances::get_finance,
        handlers::finances::update_finance,
        handlers::finances::delete_finance,
        handlers::reports::get_summary,
        handlers::files::upload_file,
    ),
    components(schemas(
        error::ErrorResponse,
        error::ValidationError,
        handlers::app::AppInfo,
        handlers::files::FileUploadForm,
        handlers::files::FileUploadResponse,
        models::DeleteResponse,
        models::UserLoginRequest,
        models::UserLoginResponse,
        models::UserDetailResponse,
        models::UserUpdateRequest,
        models::Tenant,
        models::CreateTenantRequest,
        models::UpdateTenantRequest,
        models::RoomType,
        models::CreateRoomTypeRequest,
        models::UpdateRoomTypeRequest,
        models::Facility,
        models::CreateFacilityRequest,
        models::UpdateFacilityRequest,
        models::Room,
        models::RoomStatus,
        models::CreateRoomRequest,
        models::UpdateRoomRequest,
        models::Rent,
        models::RentStatus,
        models::CreateRentRequest,
        models::UpdateRentRequest,
        models::FinanceRecord,
        models::FinanceKind,
        models::CreateFinanceRequest,
        models::UpdateFinanceRequest,
        models::ReportSummary,
    )),
    tags(
        (name = "App", description = "Service status"),
        (name = "Users", description = "Sign-in and account management"),
        (name = "Tenants", description = "People renting rooms"),
        (name = "Room types", description = "Room categories and their prices"),
        (name = "Facilities", description = "Equipment attached to rooms"),
        (name = "Rooms", description = "Rooms and their occupancy"),
        (name = "Rents", description = "Tenant to room bindings"),
        (name = "Finances", description = "Income and expense records"),
        (name = "Reports", description = "Aggregated figures"),
        (name = "Files", description = "Uploaded documents"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Registers the `api_key` header scheme and the `bearer` JWT scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
            );
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
