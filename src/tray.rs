// This file is part of simple-window-summoner and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 simple-window-summoner contributors

#[cfg(target_os = "linux")]
use debug_print::debug_println;
use tray_icon::menu::{IsMenuItem, Menu, MenuItem, Result as MenuResult, Submenu};
use tray_icon::{TrayIcon, TrayIconBuilder};

use crate::ICON_TOOLTIP;

/// Build the tray icon and its menu. On Linux the icon has to live on a GTK thread we spawn
/// here, so in that case `None` is returned and the icon is simply never dropped.
pub fn build_tray_icon() -> (MenuItems, Option<TrayIcon>) {
    // on linux we have to do this in a completely different way
    #[cfg(not(target_os = "linux"))]
    let tray_menu = Menu::new();

    let menu_items = MenuItems::default();

    // windows: do not use a submenu
    #[cfg(target_os = "windows")]
    {
        menu_items.add_to_menu(&tray_menu);
    }

    // mac: there are special submenu requirements
    #[cfg(target_os = "macos")]
    {
        // on mac all menu items must be in a submenu, so just make one with no name. Hope that doesn't cause problems...
        let submenu = tray_icon::menu::Submenu::new("", true);
        tray_menu.append(&submenu).unwrap();
        menu_items.add_to_menu(&submenu);
    }

    // on Linux this MUST be called on the GTK thread, so we have to do some weird hijinks to pass things around
    #[cfg(not(target_os = "linux"))]
    let tray_icon: Option<TrayIcon> = {
        let tray_icon_builder = TrayIconBuilder::new()
            .with_menu(Box::new(tray_menu))
            .with_tooltip(ICON_TOOLTIP)
            .with_icon(get_icon());
        Some(tray_icon_builder.build().unwrap())
    };

    #[cfg(target_os = "linux")]
    let tray_icon: Option<TrayIcon> = {
        use std::sync::{Arc, Condvar, Mutex};
        use std::time::Duration;

        let condvar_pair = Arc::new((Mutex::new(false), Condvar::new()));

        // start GTK background thread
        let condvar_pair_clone = condvar_pair.clone();
        let thread_menu_items = menu_items.clone();
        std::thread::Builder::new()
            .name("gtk-main".to_string())
            .spawn(move || {
                debug_println!("starting GTK background thread");
                gtk::init().unwrap();
                debug_println!("GTK init complete");

                // initialize the tray icon. It can't be sent between threads, so it stays here
                // for the life of the process.
                let tray_menu = Menu::new();
                thread_menu_items.add_to_menu(&tray_menu);

                let tray_icon_builder = TrayIconBuilder::new()
                    .with_menu(Box::new(tray_menu))
                    .with_tooltip(ICON_TOOLTIP)
                    .with_icon(get_icon());
                let _tray_icon = tray_icon_builder.build().unwrap();

                // signal that GTK init is complete
                {
                    let (lock, condvar) = &*condvar_pair_clone;
                    let mut gtk_started = lock.lock().unwrap();
                    *gtk_started = true;
                    condvar.notify_one();
                } // this block is actually necessary so that the lock gets released!

                debug_println!("GTK init signal sent. Starting GTK main loop.");
                loop {
                    gtk::main_iteration_do(false);
                    std::thread::yield_now();
                }
            })
            .unwrap();
        debug_println!("spawned GTK background thread");

        // wait for GTK to init
        let (lock, condvar) = &*condvar_pair;
        let gtk_started = lock.lock().unwrap();
        debug_println!("acquired GTK lock");
        if !*gtk_started {
            debug_println!("waiting for GTK init signal");
            let (gtk_started, timeout_result) = condvar.wait_timeout(gtk_started, Duration::from_secs(5)).unwrap();
            if !*gtk_started {
                panic!("GTK startup timed out = {}", timeout_result.timed_out());
            }
        }

        debug_println!("GTK startup complete");
        None
    };

    (menu_items, tray_icon)
}

/// Generate the tray icon graphic: a plain square in the window fill color.
fn get_icon() -> tray_icon::Icon {
    const DIMENSION: u32 = 32;
    const PIXEL: [u8; 4] = [0x2D, 0x2D, 0x30, 0xFF]; // RGBA

    let mut rgba = Vec::with_capacity((DIMENSION * DIMENSION) as usize * PIXEL.len());
    for _ in 0..DIMENSION * DIMENSION {
        rgba.extend_from_slice(&PIXEL);
    }
    tray_icon::Icon::from_rgba(rgba, DIMENSION, DIMENSION).unwrap()
}

/// Contains the menu items in our tray menu
#[derive(Clone)]
pub struct MenuItems {
    pub summon_button: MenuItem,
    pub hide_button: MenuItem,
    pub about_button: MenuItem,
    pub exit_button: MenuItem,
}

impl Default for MenuItems {
    fn default() -> Self {
        let summon_button = MenuItem::new("Show Window", true, None);
        let hide_button = MenuItem::new("Hide Window", true, None);
        let about_button = MenuItem::new("About", true, None);
        let exit_button = MenuItem::new("Exit", true, None);

        MenuItems {
            summon_button,
            hide_button,
            about_button,
            exit_button,
        }
    }
}

impl MenuItems {
    /// Append all the menu items into the provided `menu`.
    fn add_to_menu<T>(&self, menu: &T)
    where
        T: AppendableMenu,
    {
        menu.append(&self.summon_button).unwrap();
        menu.append(&self.hide_button).unwrap();
        menu.append(&self.about_button).unwrap();
        menu.append(&self.exit_button).unwrap();
    }
}

/// Surprisingly tray-icon doesn't provide a trait for the Menu.append() behavior several structs
/// have, so I have to build it myself for the structs I'm actually using.
trait AppendableMenu {
    /// Add a menu item to the end of this menu.
    fn append(&self, item: &dyn IsMenuItem) -> MenuResult<()>;
}

impl AppendableMenu for Menu {
    fn append(&self, item: &dyn IsMenuItem) -> MenuResult<()> {
        self.append(item)
    }
}

impl AppendableMenu for Submenu {
    fn append(&self, item: &dyn IsMenuItem) -> MenuResult<()> {
        self.append(item)
    }
}
