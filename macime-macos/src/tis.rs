//! Raw bindings to the Text Input Source Services part of Carbon

#![allow(non_upper_case_globals, non_snake_case)]

use core_foundation::array::CFArrayRef;
use core_foundation::dictionary::CFDictionaryRef;
use core_foundation::string::CFStringRef;
use core_foundation_sys::base::{Boolean, OSStatus};
use std::os::raw::c_void;

pub type TISInputSourceRef = *const c_void;

#[link(name = "Carbon", kind = "framework")]
extern "C" {
    pub static kTISPropertyInputSourceID: CFStringRef;
    pub static kTISPropertyLocalizedName: CFStringRef;
    pub static kTISPropertyInputSourceIsSelectCapable: CFStringRef;
    pub static kTISPropertyInputSourceIsSelected: CFStringRef;
    pub static kTISPropertyInputSourceLanguages: CFStringRef;

    /// Returns a +1 array of `TISInputSourceRef`
    pub fn TISCreateInputSourceList(
        properties: CFDictionaryRef,
        include_all_installed: Boolean,
    ) -> CFArrayRef;

    /// Returns a +1 reference, or NULL
    pub fn TISCopyCurrentKeyboardInputSource() -> TISInputSourceRef;

    pub fn TISSelectInputSource(source: TISInputSourceRef) -> OSStatus;

    /// Returns a borrowed CF object, or NULL
    pub fn TISGetInputSourceProperty(source: TISInputSourceRef, key: CFStringRef) -> *mut c_void;
}
