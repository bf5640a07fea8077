use super::{
    repository::{ContentDraft, ContentsRepository},
    utils::UploadFormState,
};
use crate::api::{ApiClient, ApiError, Service, ServiceContent};
use crate::utils::{file::FileMeta, message::MessageState};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ContentsViewModel {
    pub selected_service: RwSignal<Option<String>>,
    pub reload: RwSignal<u32>,
    pub services_resource: Resource<(), Result<Vec<Service>, ApiError>>,
    pub contents_resource: Resource<(Option<String>, u32), Result<Vec<ServiceContent>, ApiError>>,
    pub messages: RwSignal<MessageState>,
    pub form: RwSignal<UploadFormState>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub file: RwSignal<Option<web_sys::File>>,
    pub file_meta: RwSignal<Option<FileMeta>>,
    pub delete_target: RwSignal<Option<ServiceContent>>,
    pub upload_action: Action<ContentDraft, Result<ServiceContent, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

impl ContentsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = ContentsRepository::new_with_client(Rc::new(api));

        let selected_service = create_rw_signal(None::<String>);
        let reload = create_rw_signal(0u32);
        let messages = create_rw_signal(MessageState::default());
        let form = create_rw_signal(UploadFormState::default());
        let form_error = create_rw_signal(None::<ApiError>);
        let file = create_rw_signal(None::<web_sys::File>);
        let file_meta = create_rw_signal(None::<FileMeta>);
        let delete_target = create_rw_signal(None::<ServiceContent>);

        let repo = repository.clone();
        let services_resource = create_resource(
            || (),
            move |_| {
                let repo = repo.clone();
                async move { repo.fetch_services().await }
            },
        );

        let repo = repository.clone();
        let contents_resource = create_resource(
            move || (selected_service.get(), reload.get()),
            move |(service_id, _)| {
                let repo = repo.clone();
                async move {
                    match service_id {
                        Some(id) => repo.fetch_contents(id).await,
                        None => Ok(Vec::new()),
                    }
                }
            },
        );

        let repo = repository.clone();
        let upload_action = create_action(move |draft: &ContentDraft| {
            let repo = repo.clone();
            let draft = draft.clone();
            async move { repo.upload(draft).await }
        });

        let repo = repository;
        let delete_action = create_action(move |content_id: &String| {
            let repo = repo.clone();
            let content_id = content_id.clone();
            async move { repo.delete_content(content_id).await }
        });

        let bump = move || reload.update(|value| *value = value.wrapping_add(1));

        create_effect(move |_| {
            if let Some(result) = upload_action.value().get() {
                match result {
                    Ok(content) => {
                        messages.update(|state| {
                            state.set_success(format!("'{}' uploaded.", content.title))
                        });
                        form.update(UploadFormState::reset);
                        file.set(None);
                        file_meta.set(None);
                        bump();
                    }
                    Err(err) => form_error.set(Some(err)),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = delete_action.value().get() {
                match result {
                    Ok(()) => {
                        messages.update(|state| state.set_success("Content deleted."));
                        bump();
                    }
                    Err(err) => messages.update(|state| state.set_error(err.error)),
                }
            }
        });

        Self {
            selected_service,
            reload,
            services_resource,
            contents_resource,
            messages,
            form,
            form_error,
            file,
            file_meta,
            delete_target,
            upload_action,
            delete_action,
        }
    }

    pub fn select_service(&self, service_id: Option<String>) {
        self.selected_service
            .set(service_id.filter(|id| !id.trim().is_empty()));
        self.messages.update(MessageState::clear);
        self.form_error.set(None);
    }

    pub fn pick_file(&self, file: Option<web_sys::File>) {
        self.file_meta.set(file.as_ref().map(FileMeta::from_file));
        self.file.set(file);
        self.form_error.set(None);
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        let service_id = self.selected_service.get_untracked();
        let meta = self.file_meta.get_untracked();
        self.form
            .get_untracked()
            .validate(service_id.as_deref(), meta.as_ref())
            .map_err(ApiError::validation)
    }

    pub fn submit(&self) {
        if self.upload_action.pending().get_untracked() {
            return;
        }
        if let Err(err) = self.validate() {
            self.form_error.set(Some(err));
            return;
        }
        let (Some(service_id), Some(file)) =
            (self.selected_service.get_untracked(), self.file.get_untracked())
        else {
            return;
        };
        let form = self.form.get_untracked();
        self.form_error.set(None);
        self.upload_action.dispatch(ContentDraft {
            service_id,
            title: form.title.trim().to_string(),
            description: form.description(),
            file,
        });
    }

    pub fn confirm_delete(&self) {
        if let Some(content) = self.delete_target.get_untracked() {
            self.messages.update(MessageState::clear);
            self.delete_action.dispatch(content.id);
        }
        self.delete_target.set(None);
    }
}

pub fn use_contents_view_model() -> ContentsViewModel {
    ContentsViewModel::new()
}
