//! Seed dataset for mock mode.
//!
//! One function per catalog returning the records the console starts with
//! when no backend is configured. Ids are contiguous from 1 so the store's
//! id allocator picks up after the highest seeded id.

use serde_json::{Value, json};

use crate::CatalogKind;

/// Seed records for `kind`.
pub fn records(kind: CatalogKind) -> Vec<Value> {
    match kind {
        CatalogKind::Estados => estados(),
        CatalogKind::Empresas => empresas(),
        CatalogKind::TiposProyecto => tipos_proyecto(),
        CatalogKind::Fases => fases(),
        CatalogKind::Sistemas => sistemas(),
        CatalogKind::Subsistemas => subsistemas(),
        CatalogKind::Ramas => ramas(),
        CatalogKind::Proyectos => proyectos(),
    }
}

fn estados() -> Vec<Value> {
    vec![
        json!({"id": 1, "nombre": "Activo", "descripcion": "Estado activo"}),
        json!({"id": 2, "nombre": "Inactivo", "descripcion": "Estado inactivo"}),
        json!({"id": 3, "nombre": "En Proceso", "descripcion": "En proceso de desarrollo"}),
        json!({"id": 4, "nombre": "Completado", "descripcion": "Proyecto completado"}),
        json!({"id": 5, "nombre": "Pausado", "descripcion": "Temporalmente pausado"}),
    ]
}

fn empresas() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "nombre": "TechCorp S.A.",
            "descripcion": "Empresa de tecnología",
            "correo": "contacto@techcorp.com",
            "estadoId": 1
        }),
        json!({
            "id": 2,
            "nombre": "Innovate Solutions",
            "descripcion": "Soluciones innovadoras",
            "correo": "info@innovate.com",
            "estadoId": 1
        }),
        json!({
            "id": 3,
            "nombre": "Digital Dynamics",
            "descripcion": "Transformación digital",
            "correo": "hello@digitaldynamics.com",
            "estadoId": 1
        }),
        json!({
            "id": 4,
            "nombre": "CloudSystems Inc",
            "descripcion": "Sistemas en la nube",
            "correo": "support@cloudsystems.com",
            "estadoId": 2
        }),
    ]
}

fn tipos_proyecto() -> Vec<Value> {
    vec![
        json!({"id": 1, "nombre": "Software", "descripcion": "Desarrollo de software", "estadoId": 1}),
        json!({"id": 2, "nombre": "Hardware", "descripcion": "Desarrollo de hardware", "estadoId": 1}),
        json!({"id": 3, "nombre": "Infraestructura", "descripcion": "Proyectos de infraestructura", "estadoId": 1}),
        json!({"id": 4, "nombre": "Consultoría", "descripcion": "Servicios de consultoría", "estadoId": 1}),
        json!({"id": 5, "nombre": "Investigación", "descripcion": "Proyectos de I+D", "estadoId": 2}),
    ]
}

fn fases() -> Vec<Value> {
    vec![
        json!({"id": 1, "nombre": "Análisis", "descripcion": "Fase de análisis de requisitos", "estadoId": 1}),
        json!({"id": 2, "nombre": "Diseño", "descripcion": "Fase de diseño", "estadoId": 1}),
        json!({"id": 3, "nombre": "Desarrollo", "descripcion": "Fase de desarrollo", "estadoId": 1}),
        json!({"id": 4, "nombre": "Pruebas", "descripcion": "Fase de testing", "estadoId": 1}),
        json!({"id": 5, "nombre": "Despliegue", "descripcion": "Fase de implementación", "estadoId": 1}),
        json!({"id": 6, "nombre": "Mantenimiento", "descripcion": "Fase de soporte", "estadoId": 1}),
    ]
}

fn sistemas() -> Vec<Value> {
    vec![
        json!({"id": 1, "nombre": "Sistema Core", "descripcion": "Sistema principal", "estadoId": 1}),
        json!({"id": 2, "nombre": "Sistema Gestión", "descripcion": "Sistema de gestión empresarial", "estadoId": 1}),
        json!({"id": 3, "nombre": "Sistema Reportes", "descripcion": "Generación de reportes", "estadoId": 1}),
        json!({"id": 4, "nombre": "Sistema Analytics", "descripcion": "Análisis de datos", "estadoId": 1}),
    ]
}

fn subsistemas() -> Vec<Value> {
    vec![
        json!({"id": 1, "nombre": "Módulo Usuarios", "descripcion": "Gestión de usuarios", "sistemaId": 1, "estadoId": 1}),
        json!({"id": 2, "nombre": "Módulo Seguridad", "descripcion": "Control de acceso", "sistemaId": 1, "estadoId": 1}),
        json!({"id": 3, "nombre": "Módulo Inventario", "descripcion": "Control de inventario", "sistemaId": 2, "estadoId": 1}),
        json!({"id": 4, "nombre": "Módulo Ventas", "descripcion": "Gestión de ventas", "sistemaId": 2, "estadoId": 1}),
        json!({"id": 5, "nombre": "Módulo Dashboard", "descripcion": "Tableros de control", "sistemaId": 3, "estadoId": 1}),
    ]
}

fn ramas() -> Vec<Value> {
    vec![
        json!({"id": 1, "nombre": "main", "descripcion": "Rama principal"}),
        json!({"id": 2, "nombre": "development", "descripcion": "Rama de desarrollo"}),
        json!({"id": 3, "nombre": "staging", "descripcion": "Rama de staging"}),
        json!({"id": 4, "nombre": "feature/auth", "descripcion": "Rama de autenticación"}),
        json!({"id": 5, "nombre": "feature/dashboard", "descripcion": "Rama del dashboard"}),
        json!({"id": 6, "nombre": "hotfix/bug-123", "descripcion": "Corrección urgente"}),
    ]
}

fn proyectos() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "nombre": "Sistema ERP",
            "descripcion": "Sistema de planificación de recursos empresariales",
            "tipoProyectoId": 1,
            "empresaId": 1,
            "estadoId": 3
        }),
        json!({
            "id": 2,
            "nombre": "App Móvil",
            "descripcion": "Aplicación móvil multiplataforma",
            "tipoProyectoId": 1,
            "empresaId": 2,
            "estadoId": 3
        }),
        json!({
            "id": 3,
            "nombre": "Portal Web",
            "descripcion": "Portal corporativo web",
            "tipoProyectoId": 1,
            "empresaId": 1,
            "estadoId": 1
        }),
        json!({
            "id": 4,
            "nombre": "Migración Cloud",
            "descripcion": "Migración de infraestructura a la nube",
            "tipoProyectoId": 3,
            "empresaId": 3,
            "estadoId": 3
        }),
        json!({
            "id": 5,
            "nombre": "IoT Devices",
            "descripcion": "Desarrollo de dispositivos IoT",
            "tipoProyectoId": 2,
            "empresaId": 4,
            "estadoId": 2
        }),
    ]
}
