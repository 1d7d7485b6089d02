//! admitflow: plataforma de admisiones guiada por wizard.
//!
//! Este crate raíz sólo aporta el cableado: configuración de entorno y el
//! binario de demostración. El motor vive en `adm-core` y el contenido de
//! dominio en `adm-domain`.

pub mod config;
