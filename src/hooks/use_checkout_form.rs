use yew::prelude::*;

use crate::error::{CheckoutField, ValidationErrors};
use crate::models::{AddressKind, CheckoutForm, PaymentKind};

pub struct UseCheckoutFormHandle {
    pub form: UseStateHandle<CheckoutForm>,
    /// Recomputed from the current form on every render
    pub errors: ValidationErrors,
    /// Inline messages appear only after the first submit attempt
    pub show_errors: bool,
    pub set_address_kind: Callback<AddressKind>,
    pub set_payment_kind: Callback<PaymentKind>,
    pub set_field: Callback<(CheckoutField, String)>,
    pub set_promo_code: Callback<String>,
    pub mark_submitted: Callback<()>,
}

impl UseCheckoutFormHandle {
    /// Message for `field` if errors are being shown
    pub fn error(&self, field: CheckoutField) -> Option<String> {
        if self.show_errors {
            self.errors.message(field)
        } else {
            None
        }
    }
}

#[hook]
pub fn use_checkout_form(default_saved_address: Option<String>) -> UseCheckoutFormHandle {
    let form = {
        let default_saved_address = default_saved_address.clone();
        use_state(move || CheckoutForm::new(default_saved_address))
    };
    let submitted = use_state(|| false);
    let errors = form.errors();

    let set_address_kind = {
        let form = form.clone();
        Callback::from(move |kind: AddressKind| {
            let mut next = (*form).clone();
            next.set_address_kind(kind, default_saved_address.clone());
            form.set(next);
        })
    };

    let set_payment_kind = {
        let form = form.clone();
        Callback::from(move |kind: PaymentKind| {
            let mut next = (*form).clone();
            next.set_payment_kind(kind);
            form.set(next);
        })
    };

    let set_field = {
        let form = form.clone();
        Callback::from(move |(field, value): (CheckoutField, String)| {
            let mut next = (*form).clone();
            next.set_field(field, value);
            form.set(next);
        })
    };

    let set_promo_code = {
        let form = form.clone();
        Callback::from(move |code: String| {
            let mut next = (*form).clone();
            next.promo_code = code;
            form.set(next);
        })
    };

    let mark_submitted = {
        let submitted = submitted.clone();
        Callback::from(move |_| submitted.set(true))
    };

    UseCheckoutFormHandle {
        form,
        errors,
        show_errors: *submitted,
        set_address_kind,
        set_payment_kind,
        set_field,
        set_promo_code,
        mark_submitted,
    }
}
