use std::str::FromStr;

use super::*;

pub async fn submit_contact_handler(
    State(state): State<AppState>,
    Caller(context): Caller,
    ApiJson(payload): ApiJson<ContactSubmissionRequest>,
) -> ApiResult<(StatusCode, Json<Contact>)> {
    let contact = state
        .contact_service
        .submit(&context, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn list_contacts_handler(
    State(state): State<AppState>,
    Admin(_context): Admin,
    ApiQuery(query): ApiQuery<ContactListQuery>,
) -> ApiResult<Json<PageResponse<Contact>>> {
    let status = query
        .status
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .map(ContactStatus::from_str)
        .transpose()?;
    let needle = query.q.unwrap_or_default();

    let contacts = state
        .contact_service
        .list(status)
        .await?
        .into_iter()
        .filter(|contact| {
            matches_search(needle.as_str(), contact.sender_description().as_str(), None)
                || contact
                    .subject
                    .as_deref()
                    .is_some_and(|subject| matches_search(needle.as_str(), subject, None))
        })
        .collect();

    Ok(Json(paginate(
        contacts,
        query.page,
        query.page_size,
        state.default_page_size,
    )?))
}

pub async fn get_contact_handler(
    State(state): State<AppState>,
    Admin(_context): Admin,
    ApiPath(id): ApiPath<RecordId>,
) -> ApiResult<Json<Contact>> {
    Ok(Json(state.contact_service.contacts().get(id).await?))
}

pub async fn set_contact_status_handler(
    State(state): State<AppState>,
    Admin(context): Admin,
    ApiPath(id): ApiPath<RecordId>,
    ApiJson(payload): ApiJson<StatusRequest>,
) -> ApiResult<Json<Contact>> {
    let status = ContactStatus::from_str(payload.status.as_str())?;
    Ok(Json(
        state
            .contact_service
            .set_status(&context, id, status)
            .await?,
    ))
}

pub async fn set_contact_note_handler(
    State(state): State<AppState>,
    Admin(context): Admin,
    ApiPath(id): ApiPath<RecordId>,
    ApiJson(payload): ApiJson<ContactNoteRequest>,
) -> ApiResult<Json<Contact>> {
    Ok(Json(
        state
            .contact_service
            .set_note(&context, id, payload.note)
            .await?,
    ))
}

pub async fn delete_contact_handler(
    State(state): State<AppState>,
    Admin(context): Admin,
    ApiPath(id): ApiPath<RecordId>,
) -> ApiResult<StatusCode> {
    state.contact_service.delete(&context, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
