use super::{repository::ServicesRepository, utils::ServiceFormState};
use crate::api::{ApiClient, ApiError, Service, ServicePayload};
use crate::utils::message::MessageState;
use leptos::*;
use std::rc::Rc;

pub type SaveRequest = (Option<String>, ServicePayload);

#[derive(Clone, Copy)]
pub struct ServicesViewModel {
    pub services_resource: Resource<u32, Result<Vec<Service>, ApiError>>,
    pub reload: RwSignal<u32>,
    pub messages: RwSignal<MessageState>,
    pub form: RwSignal<ServiceFormState>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub editing: RwSignal<Option<Service>>,
    pub dialog_open: RwSignal<bool>,
    pub delete_target: RwSignal<Option<Service>>,
    pub save_action: Action<SaveRequest, Result<Service, ApiError>>,
    pub toggle_action: Action<Service, Result<Service, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

impl ServicesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = ServicesRepository::new_with_client(Rc::new(api));

        let reload = create_rw_signal(0u32);
        let messages = create_rw_signal(MessageState::default());
        let form = create_rw_signal(ServiceFormState::default());
        let form_error = create_rw_signal(None::<ApiError>);
        let editing = create_rw_signal(None::<Service>);
        let dialog_open = create_rw_signal(false);
        let delete_target = create_rw_signal(None::<Service>);

        let repo = repository.clone();
        let services_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repo.clone();
                async move { repo.fetch_services().await }
            },
        );

        let repo = repository.clone();
        let save_action = create_action(move |(id, payload): &SaveRequest| {
            let repo = repo.clone();
            let id = id.clone();
            let payload = payload.clone();
            async move { repo.save_service(id, payload).await }
        });

        let repo = repository.clone();
        let toggle_action = create_action(move |service: &Service| {
            let repo = repo.clone();
            let service = service.clone();
            async move { repo.toggle_active(service).await }
        });

        let repo = repository;
        let delete_action = create_action(move |service_id: &String| {
            let repo = repo.clone();
            let service_id = service_id.clone();
            async move { repo.delete_service(service_id).await }
        });

        let bump = move || reload.update(|value| *value = value.wrapping_add(1));

        create_effect(move |_| {
            if let Some(result) = save_action.value().get() {
                match result {
                    Ok(service) => {
                        messages.update(|state| {
                            state.set_success(format!("Service '{}' saved.", service.name))
                        });
                        dialog_open.set(false);
                        form.update(ServiceFormState::reset);
                        editing.set(None);
                        bump();
                    }
                    Err(err) => form_error.set(Some(err)),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = toggle_action.value().get() {
                match result {
                    Ok(service) => {
                        let state_label = if service.is_active { "activated" } else { "deactivated" };
                        messages.update(|state| {
                            state.set_success(format!("Service '{}' {}.", service.name, state_label))
                        });
                        bump();
                    }
                    Err(err) => messages.update(|state| state.set_error(err.error)),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = delete_action.value().get() {
                match result {
                    Ok(()) => {
                        messages.update(|state| state.set_success("Service deleted."));
                        bump();
                    }
                    Err(err) => messages.update(|state| state.set_error(err.error)),
                }
            }
        });

        Self {
            services_resource,
            reload,
            messages,
            form,
            form_error,
            editing,
            dialog_open,
            delete_target,
            save_action,
            toggle_action,
            delete_action,
        }
    }

    pub fn open_create(&self) {
        self.editing.set(None);
        self.form.set(ServiceFormState::default());
        self.form_error.set(None);
        self.dialog_open.set(true);
    }

    pub fn open_edit(&self, service: Service) {
        self.form.set(ServiceFormState::from_service(&service));
        self.editing.set(Some(service));
        self.form_error.set(None);
        self.dialog_open.set(true);
    }

    pub fn close_dialog(&self) {
        self.dialog_open.set(false);
        self.form_error.set(None);
    }

    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        match self.form.get_untracked().to_payload() {
            Ok(payload) => {
                self.form_error.set(None);
                let id = self.editing.get_untracked().map(|service| service.id);
                self.save_action.dispatch((id, payload));
            }
            Err(msg) => self.form_error.set(Some(ApiError::validation(msg))),
        }
    }

    pub fn confirm_delete(&self) {
        if let Some(service) = self.delete_target.get_untracked() {
            self.messages.update(MessageState::clear);
            self.delete_action.dispatch(service.id);
        }
        self.delete_target.set(None);
    }
}

pub fn use_services_view_model() -> ServicesViewModel {
    ServicesViewModel::new()
}
