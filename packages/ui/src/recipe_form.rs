use api::RecipeDraft;
use dioxus::prelude::*;

use crate::forms::{validate_recipe, FormErrors, RecipeInput, CUISINE_TYPES};
use crate::icons::{FaPlus, FaTrashCan};
use crate::Icon;

/// Which repeated row list an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowList {
    Ingredients,
    Dietary,
}

fn rows_mut(input: &mut RecipeInput, list: RowList) -> &mut Vec<String> {
    match list {
        RowList::Ingredients => &mut input.ingredients,
        RowList::Dietary => &mut input.dietary_preferences,
    }
}

/// Create and edit form for recipes.
///
/// Validation runs on submit; `on_submit` only ever sees a valid draft.
#[component]
pub fn RecipeForm(
    initial: RecipeInput,
    submit_label: String,
    #[props(default)] busy: bool,
    on_submit: EventHandler<RecipeDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut input = use_signal(|| initial.clone());
    let mut errors = use_signal(FormErrors::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        match validate_recipe(&input.read()) {
            Ok(draft) => {
                errors.set(FormErrors::new());
                on_submit.call(draft);
            }
            Err(e) => errors.set(e),
        }
    };

    let mut edit_row = move |list: RowList, index: usize, value: String| {
        if let Some(row) = rows_mut(&mut input.write(), list).get_mut(index) {
            *row = value;
        }
    };
    let mut add_row = move |list: RowList| rows_mut(&mut input.write(), list).push(String::new());
    let mut remove_row = move |list: RowList, index: usize| {
        let mut form = input.write();
        let rows = rows_mut(&mut form, list);
        if rows.len() > 1 && index < rows.len() {
            rows.remove(index);
        }
    };

    let row_section = move |list: RowList, label: &'static str, placeholder: &'static str| {
        let rows = match list {
            RowList::Ingredients => input.read().ingredients.clone(),
            RowList::Dietary => input.read().dietary_preferences.clone(),
        };
        let removable = rows.len() > 1;
        rsx! {
            div {
                class: "form-group",
                label { "{label}" }
                for (index, row) in rows.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "row-input",
                        input {
                            r#type: "text",
                            placeholder,
                            value: "{row}",
                            oninput: move |evt: FormEvent| edit_row(list, index, evt.value()),
                        }
                        if removable {
                            button {
                                r#type: "button",
                                class: "btn btn-ghost",
                                onclick: move |_| remove_row(list, index),
                                Icon { icon: FaTrashCan, width: 12, height: 12 }
                            }
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "btn btn-secondary btn-sm",
                    onclick: move |_| add_row(list),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add"
                }
            }
        }
    };

    let form = input.read().clone();

    rsx! {
        form {
            class: "card recipe-form",
            onsubmit: submit,

            div {
                class: "form-group",
                label { r#for: "recipe-title", "Title *" }
                input {
                    id: "recipe-title",
                    r#type: "text",
                    value: "{form.title}",
                    oninput: move |evt: FormEvent| input.write().title = evt.value(),
                }
                if let Some(msg) = errors.read().get("title") {
                    p { class: "field-error", "{msg}" }
                }
            }

            div {
                class: "form-group",
                label { r#for: "recipe-cuisine", "Cuisine" }
                select {
                    id: "recipe-cuisine",
                    value: "{form.cuisine}",
                    onchange: move |evt: FormEvent| input.write().cuisine = evt.value(),
                    option { value: "", "Select a cuisine type" }
                    for cuisine in CUISINE_TYPES.iter() {
                        option { key: "{cuisine}", value: "{cuisine}", selected: form.cuisine == *cuisine, "{cuisine}" }
                    }
                }
            }

            div {
                class: "form-row",
                div {
                    class: "form-group",
                    label { r#for: "recipe-prep", "Prep time (minutes)" }
                    input {
                        id: "recipe-prep",
                        r#type: "number",
                        min: "0",
                        value: "{form.prep_time_minutes}",
                        oninput: move |evt: FormEvent| input.write().prep_time_minutes = evt.value(),
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "recipe-cook", "Cook time (minutes)" }
                    input {
                        id: "recipe-cook",
                        r#type: "number",
                        min: "0",
                        value: "{form.cook_time_minutes}",
                        oninput: move |evt: FormEvent| input.write().cook_time_minutes = evt.value(),
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "recipe-servings", "Servings" }
                    input {
                        id: "recipe-servings",
                        r#type: "number",
                        min: "1",
                        value: "{form.servings}",
                        oninput: move |evt: FormEvent| input.write().servings = evt.value(),
                    }
                }
            }

            {row_section(RowList::Ingredients, "Ingredients", "e.g. 200g spaghetti")}

            div {
                class: "form-group",
                label { r#for: "recipe-instructions", "Instructions *" }
                textarea {
                    id: "recipe-instructions",
                    rows: "8",
                    value: "{form.instructions}",
                    oninput: move |evt: FormEvent| input.write().instructions = evt.value(),
                }
                if let Some(msg) = errors.read().get("instructions") {
                    p { class: "field-error", "{msg}" }
                }
            }

            div {
                class: "form-group",
                label { r#for: "recipe-image", "Image URL" }
                input {
                    id: "recipe-image",
                    r#type: "url",
                    placeholder: "https://...",
                    value: "{form.image_url}",
                    oninput: move |evt: FormEvent| input.write().image_url = evt.value(),
                }
            }

            {row_section(RowList::Dietary, "Dietary preferences", "e.g. Vegetarian")}

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
