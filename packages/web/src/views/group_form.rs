use api::{GroupDraft, GroupId};
use dioxus::prelude::*;
use ui::forms::{validate_group, FormErrors, CUISINE_TYPES};
use ui::permissions::can_manage_group;
use ui::{use_alerts, use_services, use_session};

use crate::Route;

/// Fields shared by the create and edit pages. `on_submit` only sees a valid draft.
#[component]
fn GroupFields(
    initial: GroupDraft,
    submit_label: String,
    busy: bool,
    on_submit: EventHandler<GroupDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(|| initial.clone());
    let mut errors = use_signal(FormErrors::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        match validate_group(&draft.read()) {
            Ok(valid) => {
                errors.set(FormErrors::new());
                on_submit.call(valid);
            }
            Err(e) => errors.set(e),
        }
    };

    let form = draft.read().clone();

    rsx! {
        form {
            class: "card",
            onsubmit: submit,
            div {
                class: "form-group",
                label { r#for: "group-name", "Group name *" }
                input {
                    id: "group-name",
                    r#type: "text",
                    value: "{form.name}",
                    oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                }
                if let Some(msg) = errors.read().get("name") {
                    p { class: "field-error", "{msg}" }
                }
            }
            div {
                class: "form-group",
                label { r#for: "group-description", "Description *" }
                textarea {
                    id: "group-description",
                    rows: "4",
                    value: "{form.description}",
                    oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                }
                if let Some(msg) = errors.read().get("description") {
                    p { class: "field-error", "{msg}" }
                }
            }
            div {
                class: "form-group",
                label { r#for: "group-cuisine", "Cuisine type *" }
                select {
                    id: "group-cuisine",
                    value: "{form.cuisine_type}",
                    onchange: move |evt: FormEvent| draft.write().cuisine_type = evt.value(),
                    option { value: "", "Select a cuisine type" }
                    for cuisine in CUISINE_TYPES.iter() {
                        option { key: "{cuisine}", value: "{cuisine}", selected: form.cuisine_type == *cuisine, "{cuisine}" }
                    }
                }
                if let Some(msg) = errors.read().get("cuisine_type") {
                    p { class: "field-error", "{msg}" }
                }
            }
            div {
                class: "form-group",
                label { r#for: "group-image", "Image URL" }
                input {
                    id: "group-image",
                    r#type: "url",
                    placeholder: "https://...",
                    value: "{form.image_url}",
                    oninput: move |evt: FormEvent| draft.write().image_url = evt.value(),
                }
            }
            div {
                class: "form-actions",
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: busy,
                    if busy { "Saving..." } else { "{submit_label}" }
                }
            }
        }
    }
}

#[component]
pub fn CreateGroup() -> Element {
    let session = use_session();
    let services = use_services();
    let alerts = use_alerts();
    let nav = use_navigator();
    let mut saving = use_signal(|| false);

    let create_api = services.groups.clone();
    let create = move |draft: GroupDraft| {
        let Some(viewer) = session.user_id() else {
            return;
        };
        let api = create_api.clone();
        spawn(async move {
            saving.set(true);
            match api.create(&draft, viewer).await {
                Ok(group) => {
                    alerts.success("Group created", &format!("{} is ready.", group.name));
                    nav.replace(Route::GroupDetail { group_id: group.id });
                }
                Err(e) => alerts.api_error("create group", &e, "Failed to create group."),
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            class: "narrow",
            h1 { "Create a group" }
            GroupFields {
                initial: GroupDraft::default(),
                submit_label: "Create group",
                busy: saving(),
                on_submit: create,
                on_cancel: move |_| { nav.push(Route::AllGroups {}); },
            }
        }
    }
}

/// Admin-only edit page. A non-admin is sent back to the group.
#[component]
pub fn EditGroup(group_id: GroupId) -> Element {
    let session = use_session();
    let services = use_services();
    let alerts = use_alerts();
    let nav = use_navigator();
    let mut saving = use_signal(|| false);
    let viewer = session.user_id();

    let load_api = services.groups.clone();
    let group = use_resource(use_reactive!(|(group_id,)| {
        let api = load_api.clone();
        async move {
            let Some(viewer) = viewer else {
                return Ok(None);
            };
            let group = api.get(group_id).await?;
            let flags = api.role_flags(group_id, viewer).await?;
            Ok::<_, api::ApiError>(can_manage_group(flags).then_some(group))
        }
    }));

    let denied = matches!(&*group.read(), Some(Ok(None)));
    use_effect(use_reactive!(|(denied,)| {
        if denied {
            alerts.error("Not allowed", "Only the group admin can edit this group.");
            nav.replace(Route::GroupDetail { group_id });
        }
    }));

    let save_api = services.groups.clone();
    let save = move |draft: GroupDraft| {
        let Some(viewer) = viewer else {
            return;
        };
        let api = save_api.clone();
        spawn(async move {
            saving.set(true);
            match api.update(group_id, &draft, viewer).await {
                Ok(_) => {
                    alerts.success("Saved", "Group updated.");
                    nav.replace(Route::GroupDetail { group_id });
                }
                Err(e) => alerts.api_error("update group", &e, "Failed to update group."),
            }
            saving.set(false);
        });
    };

    let body = match &*group.read() {
        None => rsx! { p { class: "muted", "Loading group..." } },
        Some(Err(e)) => {
            tracing::error!("Failed to load group {} for editing: {}", group_id, e);
            rsx! { p { class: "error-text", "Failed to load group details." } }
        }
        Some(Ok(None)) => rsx! {},
        Some(Ok(Some(g))) => rsx! {
            GroupFields {
                key: "{g.id}",
                initial: g.draft(),
                submit_label: "Save changes",
                busy: saving(),
                on_submit: save,
                on_cancel: move |_| { nav.push(Route::GroupDetail { group_id }); },
            }
        },
    };

    rsx! {
        div {
            class: "narrow",
            h1 { "Edit group" }
            {body}
        }
    }
}
