//! Display strings for the users screen.
//!
//! The screen ships with English and Spanish labels. Column and filter-kind
//! labels live next to their types (`Column::label`, `FilterKind::label`);
//! everything else the panel shows is in [`Strings`].

use std::str::FromStr;

/// Host locale used to label the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

/// Static labels for buttons, headings and modals.
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub create_user: &'static str,
    pub reset_filters: &'static str,
    pub loading: &'static str,
    pub actions: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub new_user: &'static str,
    pub edit_user: &'static str,
    pub delete_user: &'static str,
    pub confirm_delete: &'static str,
    pub filter_placeholder: &'static str,
    pub error: &'static str,
    pub no_users: &'static str,
}

const EN: Strings = Strings {
    title: "Users",
    create_user: "+ Create User",
    reset_filters: "Reset filters",
    loading: "Loading...",
    actions: "Actions",
    edit: "Edit",
    delete: "Delete",
    save: "Save",
    cancel: "Cancel",
    new_user: "New User",
    edit_user: "Edit User",
    delete_user: "Delete User",
    confirm_delete: "Delete this user?",
    filter_placeholder: "Filter",
    error: "Error",
    no_users: "No users to show",
};

const ES: Strings = Strings {
    title: "Lista de Usuarios",
    create_user: "+ Crear Usuario",
    reset_filters: "Limpiar filtros",
    loading: "Cargando...",
    actions: "Acciones",
    edit: "Editar",
    delete: "Eliminar",
    save: "Guardar",
    cancel: "Cancelar",
    new_user: "Nuevo Usuario",
    edit_user: "Editar Usuario",
    delete_user: "Eliminar Usuario",
    confirm_delete: "¿Eliminar?",
    filter_placeholder: "Filtrar",
    error: "Error",
    no_users: "No hay usuarios",
};

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Self::En => &EN,
            Self::Es => &ES,
        }
    }
}
